//! CSV loader for the prefecture population table.
//!
//! Maps the source's external column names (`estimated_area`, `prefecture`,
//! `year`, `population`, `capital`, `region`, `island`) onto the canonical
//! [`RawRecord`] fields. Rows with a missing, blank, or unparsable field
//! are dropped; that is a cleaning policy, not an error.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use population_atlas_dataset_models::RawRecord;

use crate::DatasetError;

/// External column names required in the source header, case-sensitive.
const REQUIRED_COLUMNS: &[&str] = &[
    "estimated_area",
    "prefecture",
    "year",
    "population",
    "capital",
    "region",
    "island",
];

/// Resolved positions of the required columns in the header row.
struct ColumnIndices {
    prefecture: usize,
    year: usize,
    population: usize,
    area: usize,
    capital: usize,
    region: usize,
    island: usize,
}

impl ColumnIndices {
    /// Locates every required column, collecting all misses so the error
    /// names the full set of missing columns at once.
    fn resolve(headers: &csv::StringRecord) -> Result<Self, DatasetError> {
        let position =
            |name: &str| -> Option<usize> { headers.iter().position(|h| h.trim() == name) };

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|&name| position(name).is_none())
            .map(str::to_owned)
            .collect();
        if !missing.is_empty() {
            return Err(DatasetError::MissingColumns { missing });
        }

        let at = |name: &str| -> usize {
            // Misses were rejected above.
            position(name).unwrap_or_default()
        };

        Ok(Self {
            prefecture: at("prefecture"),
            year: at("year"),
            population: at("population"),
            area: at("estimated_area"),
            capital: at("capital"),
            region: at("region"),
            island: at("island"),
        })
    }
}

/// Parses one CSV row into a [`RawRecord`].
///
/// Returns `None` when any field is absent, blank, or (for the numeric
/// fields) not a finite number. The year is a real in the source and is
/// rounded to the nearest integer.
#[allow(clippy::cast_possible_truncation)]
fn parse_row(record: &csv::StringRecord, columns: &ColumnIndices) -> Option<RawRecord> {
    let text = |index: usize| -> Option<String> {
        let value = record.get(index)?.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_owned())
        }
    };
    let number = |index: usize| -> Option<f64> {
        record
            .get(index)?
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    };

    Some(RawRecord {
        prefecture: text(columns.prefecture)?,
        year: number(columns.year)?.round() as i64,
        population: number(columns.population)?,
        area_km2: number(columns.area)?,
        capital: text(columns.capital)?,
        region: text(columns.region)?,
        island: text(columns.island)?,
    })
}

/// Loads the raw table from any CSV byte stream.
///
/// # Errors
///
/// Returns [`DatasetError`] if the stream is unreadable, is not valid
/// CSV, or its header lacks a required column.
pub fn load_reader<R: Read>(reader: R) -> Result<Vec<RawRecord>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let columns = ColumnIndices::resolve(csv_reader.headers()?)?;

    let mut records = Vec::new();
    let mut dropped: u64 = 0;

    for result in csv_reader.records() {
        let record = result?;
        match parse_row(&record, &columns) {
            Some(raw) => records.push(raw),
            None => {
                dropped += 1;
                log::debug!("Dropping incomplete row: {record:?}");
            }
        }
    }

    log::info!(
        "Loaded {} records ({dropped} incomplete rows dropped)",
        records.len()
    );

    Ok(records)
}

/// Loads the raw table from a CSV file on disk.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be opened or parsed, or
/// if its header lacks a required column.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>, DatasetError> {
    let path = path.as_ref();
    log::info!("Loading population data from {}", path.display());
    load_reader(File::open(path)?)
}

/// Loads the raw table from a CSV file and returns it together with the
/// source's content fingerprint (see [`crate::fingerprint`]).
///
/// The fingerprint is the cache key for the augmented table, so callers
/// that memoize augmentation should prefer this over [`load_path`].
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be read or parsed, or if
/// its header lacks a required column.
pub fn load_path_fingerprinted<P: AsRef<Path>>(
    path: P,
) -> Result<(Vec<RawRecord>, String), DatasetError> {
    let path = path.as_ref();
    log::info!("Loading population data from {}", path.display());
    let bytes = std::fs::read(path)?;
    let key = crate::fingerprint(&bytes);
    let records = load_reader(bytes.as_slice())?;
    Ok((records, key))
}
