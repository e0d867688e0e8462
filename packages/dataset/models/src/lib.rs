#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Record types for the Japan prefecture population dataset.
//!
//! This crate defines the canonical row types shared across the whole
//! population-atlas system: the cleaned input row ([`RawRecord`]) and the
//! row after derived-metric computation ([`AugmentedRecord`]), plus the
//! canonical column names used for display and CSV export.

use serde::{Deserialize, Serialize};

/// Canonical column names of the augmented table, in export order.
///
/// The first seven entries are the raw fields; the rest are derived.
/// CSV export writes exactly these names as the header row.
pub const EXPORT_COLUMNS: &[&str] = &[
    "Prefecture",
    "Year",
    "Population",
    "Area (km²)",
    "Capital",
    "Region",
    "Island",
    "Latitude",
    "Longitude",
    "Population Density",
    "Area per Person",
    "Population Share (%)",
    "Population Change",
    "Population Change (%)",
    "Density Change",
    "Population Rank",
    "Density Rank",
    "Region Total Population",
];

/// One prefecture-year observation after load-time cleaning.
///
/// Rows with any missing field are dropped by the loader, so every field
/// here is present. No further validation is applied: out-of-range years,
/// zero populations, and duplicate (prefecture, year) pairs pass through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Prefecture name (e.g. "Tokyo-to", "Hokkaido").
    pub prefecture: String,
    /// Observation year, rounded to the nearest integer at load time.
    pub year: i64,
    /// Estimated population.
    pub population: f64,
    /// Estimated area in square kilometres.
    pub area_km2: f64,
    /// Capital city of the prefecture.
    pub capital: String,
    /// Region grouping (e.g. "Kanto", "Kansai"); many-to-one with prefecture.
    pub region: String,
    /// Island grouping (e.g. "Honshu", "Kyushu"); many-to-one with prefecture.
    pub island: String,
}

/// A [`RawRecord`] plus every derived metric.
///
/// Produced once per dataset by the augmenter; treated as immutable
/// afterwards. All derived fields are functions of the full table state,
/// not just the row itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AugmentedRecord {
    /// Prefecture name.
    pub prefecture: String,
    /// Observation year.
    pub year: i64,
    /// Estimated population.
    pub population: f64,
    /// Estimated area in square kilometres.
    pub area_km2: f64,
    /// Capital city.
    pub capital: String,
    /// Region grouping.
    pub region: String,
    /// Island grouping.
    pub island: String,
    /// Centroid latitude; `None` when the prefecture is not in the
    /// coordinate table.
    pub latitude: Option<f64>,
    /// Centroid longitude; `None` when the prefecture is not in the
    /// coordinate table.
    pub longitude: Option<f64>,
    /// Population per square kilometre.
    pub population_density: f64,
    /// Square kilometres per person. `+inf` when the population is zero.
    pub area_per_person: f64,
    /// This row's share of the total population of its year, in percent.
    /// Zero when the year's total population is zero.
    pub population_share_pct: f64,
    /// Population difference from the previous observation of the same
    /// prefecture (year-ascending order). Zero for the first observation.
    pub population_change: f64,
    /// [`Self::population_change`] as a percentage of the previous
    /// population. Zero for the first observation; `+inf` when growing
    /// from a zero base.
    pub population_change_pct: f64,
    /// Density difference from the previous observation of the same
    /// prefecture. Zero for the first observation.
    pub density_change: f64,
    /// Dense rank of population within the year, descending (1 = largest).
    pub population_rank: u32,
    /// Dense rank of density within the year, descending (1 = largest).
    pub density_rank: u32,
    /// Total population of this row's (region, year) group.
    pub region_total_population: f64,
}
