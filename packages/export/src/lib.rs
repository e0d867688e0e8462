#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CSV export of filtered population views.
//!
//! Writes UTF-8, comma-separated CSV with a header row of the canonical
//! column names and no index column. Numbers use Rust's shortest
//! `Display` form, so integral values print without a trailing `.0` and
//! a re-parse reproduces the exported values. An empty view exports as a
//! header-only file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use population_atlas_dataset_models::{AugmentedRecord, EXPORT_COLUMNS};
use thiserror::Error;

/// Errors that can occur while exporting a view.
#[derive(Debug, Error)]
pub enum ExportError {
    /// An I/O operation on the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The assembled CSV was not valid UTF-8.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Writes `records` as CSV to `writer`, header row first.
///
/// # Errors
///
/// Returns [`ExportError`] if writing or CSV serialization fails.
pub fn write_csv<W: Write>(writer: W, records: &[AugmentedRecord]) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(EXPORT_COLUMNS)?;
    for record in records {
        csv_writer.write_record(&record_fields(record))?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Writes `records` as a CSV file at `path`.
///
/// # Errors
///
/// Returns [`ExportError`] if the file cannot be created or written.
pub fn write_path<P: AsRef<Path>>(path: P, records: &[AugmentedRecord]) -> Result<(), ExportError> {
    let path = path.as_ref();
    write_csv(File::create(path)?, records)?;
    log::info!("Exported {} records to {}", records.len(), path.display());
    Ok(())
}

/// Renders `records` as an in-memory CSV string.
///
/// # Errors
///
/// Returns [`ExportError`] if CSV serialization fails.
pub fn to_csv_string(records: &[AugmentedRecord]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, records)?;
    Ok(String::from_utf8(buffer)?)
}

/// One record's cells, in [`EXPORT_COLUMNS`] order.
fn record_fields(record: &AugmentedRecord) -> Vec<String> {
    vec![
        record.prefecture.clone(),
        record.year.to_string(),
        record.population.to_string(),
        record.area_km2.to_string(),
        record.capital.clone(),
        record.region.clone(),
        record.island.clone(),
        optional_cell(record.latitude),
        optional_cell(record.longitude),
        record.population_density.to_string(),
        record.area_per_person.to_string(),
        record.population_share_pct.to_string(),
        record.population_change.to_string(),
        record.population_change_pct.to_string(),
        record.density_change.to_string(),
        record.population_rank.to_string(),
        record.density_rank.to_string(),
        record.region_total_population.to_string(),
    ]
}

/// Missing coordinates export as empty cells.
fn optional_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
