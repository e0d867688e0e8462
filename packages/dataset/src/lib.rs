#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Loading and cleaning of the raw prefecture population table.
//!
//! The loader reads a CSV source, maps the external column names to the
//! canonical field set, drops incomplete rows, and coerces the year to an
//! integer. Anything beyond that (range checks, duplicate detection) is
//! deliberately not validated here; downstream computation is defined for
//! whatever survives the drop-incomplete step.

pub mod loader;

use sha2::{Digest, Sha256};
use thiserror::Error;

pub use loader::{load_path, load_path_fingerprinted, load_reader};

/// Errors that can occur while loading the dataset.
///
/// Loader errors are fatal: a partially readable source is never
/// presented as a complete dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// An I/O operation on the source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The source is missing one or more required columns.
    #[error("Missing required columns: {}", missing.join(", "))]
    MissingColumns {
        /// The required column names absent from the header row.
        missing: Vec<String>,
    },
}

/// Returns the lowercase hex SHA-256 digest of the raw source bytes.
///
/// Used as the content-identity cache key for the augmented table: the
/// key depends only on the data source, never on any filter state.
#[must_use]
pub fn fingerprint(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
