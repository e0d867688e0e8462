#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived-metric computation and filtering over the population table.
//!
//! The augmenter ([`augment::augment`]) turns the cleaned raw table into
//! the augmented table in one pass of explicit group-by-key steps. It is
//! pure and total: same input, same output, no failure paths. The result
//! is meant to be computed once per data source and shared read-only;
//! [`cache::AugmentCache`] provides the get-or-compute memo for that, and
//! [`filter::apply`] derives ephemeral per-interaction views from it.
//! [`summary`] holds the aggregations consumed by presentation layers.

pub mod augment;
pub mod cache;
pub mod filter;
pub mod summary;

pub use augment::augment;
pub use cache::AugmentCache;
pub use filter::{apply, data_year_bounds};
