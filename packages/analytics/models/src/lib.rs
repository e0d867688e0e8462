#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filter selection and summary result types.
//!
//! These are the input/output types of the analytics crate: what a user
//! interaction selects ([`FilterSpec`]) and the aggregate shapes handed
//! to presentation layers ([`PrefectureSummary`], [`RegionTrendPoint`],
//! [`HeatPoint`]).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An inclusive year interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRange {
    /// First year of the interval.
    pub start: i64,
    /// Last year of the interval, inclusive.
    pub end: i64,
}

impl YearRange {
    /// Creates a range spanning `start..=end`.
    #[must_use]
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Returns whether `year` falls inside the interval, both ends
    /// inclusive.
    #[must_use]
    pub const fn contains(self, year: i64) -> bool {
        self.start <= year && year <= self.end
    }
}

/// A user-selected filter over the augmented table.
///
/// An empty prefecture or island set means "match all", not "match
/// none"; the filter engine checks emptiness explicitly before testing
/// membership. The year range is inclusive on both ends and is expected
/// to be clamped to the data's observed bounds by the caller; a range
/// disjoint from the data simply selects nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Prefectures to keep; empty selects every prefecture.
    pub prefectures: BTreeSet<String>,
    /// Islands to keep; empty selects every island.
    pub islands: BTreeSet<String>,
    /// Inclusive year interval to keep.
    pub years: YearRange,
}

impl FilterSpec {
    /// Creates a filter that matches everything within `years`.
    #[must_use]
    pub const fn all_within(years: YearRange) -> Self {
        Self {
            prefectures: BTreeSet::new(),
            islands: BTreeSet::new(),
            years,
        }
    }
}

/// Per-prefecture averages over a filtered view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefectureSummary {
    /// Prefecture name.
    pub prefecture: String,
    /// Mean population over the view, rounded to 2 decimal places.
    pub mean_population: f64,
    /// Mean population density over the view, rounded to 2 decimal places.
    pub mean_density: f64,
}

/// One (region, year) total in a regional trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionTrendPoint {
    /// Region name.
    pub region: String,
    /// Observation year.
    pub year: i64,
    /// Total population of the region in that year.
    pub population: f64,
}

/// A weighted map point for density heatmap rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatPoint {
    /// Point latitude.
    pub latitude: f64,
    /// Point longitude.
    pub longitude: f64,
    /// Density weight normalized to `[0, 1]` over the view.
    pub weight: f64,
}
