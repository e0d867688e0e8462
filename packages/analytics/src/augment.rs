//! Derived-metric augmentation of the raw population table.
//!
//! Each step below is an explicit group-by-key pass: an auxiliary map
//! from grouping key to aggregate is built first, then joined back onto
//! every record by that key. Nothing relies on row alignment, and the
//! output keeps the input's row order so callers may re-sort freely.

use std::collections::BTreeMap;

use population_atlas_dataset_models::{AugmentedRecord, RawRecord};

/// Computes every derived metric for the raw table.
///
/// Pure and total: no I/O, no failure paths, deterministic for a given
/// input, and therefore safe to memoize by source identity. An empty
/// input yields an empty output.
#[must_use]
pub fn augment(raw: &[RawRecord]) -> Vec<AugmentedRecord> {
    if raw.is_empty() {
        return Vec::new();
    }

    log::info!("Augmenting {} records", raw.len());

    let mut records: Vec<AugmentedRecord> = raw.iter().map(geocode_and_rates).collect();

    apply_year_shares(&mut records);
    apply_prefecture_changes(&mut records);
    apply_year_ranks(&mut records);
    apply_region_totals(&mut records);

    records
}

/// Step 1–2: coordinate lookup plus the row-local rate fields.
///
/// Unknown prefectures keep their record and get `None` coordinates.
/// Area is positive for every loaded row, so density is finite; a zero
/// population makes `area_per_person` `+inf` rather than an error.
fn geocode_and_rates(raw: &RawRecord) -> AugmentedRecord {
    let (latitude, longitude) = match population_atlas_geography::coords(&raw.prefecture) {
        Some((lat, lon)) => (Some(lat), Some(lon)),
        None => (None, None),
    };

    AugmentedRecord {
        prefecture: raw.prefecture.clone(),
        year: raw.year,
        population: raw.population,
        area_km2: raw.area_km2,
        capital: raw.capital.clone(),
        region: raw.region.clone(),
        island: raw.island.clone(),
        latitude,
        longitude,
        population_density: raw.population / raw.area_km2,
        area_per_person: raw.area_km2 / raw.population,
        population_share_pct: 0.0,
        population_change: 0.0,
        population_change_pct: 0.0,
        density_change: 0.0,
        population_rank: 0,
        density_rank: 0,
        region_total_population: 0.0,
    }
}

/// Step 3: population share of the year's total, in percent.
///
/// For a year whose total population is zero the share is defined as
/// zero for every record of that year.
fn apply_year_shares(records: &mut [AugmentedRecord]) {
    let mut year_totals: BTreeMap<i64, f64> = BTreeMap::new();
    for record in records.iter() {
        *year_totals.entry(record.year).or_insert(0.0) += record.population;
    }

    for record in records.iter_mut() {
        let share = record.population / year_totals[&record.year] * 100.0;
        record.population_share_pct = if share.is_finite() { share } else { 0.0 };
    }
}

/// Step 4: first differences of population and density per prefecture.
///
/// Each prefecture's records are ordered by year ascending (stable for
/// equal years) before differencing, regardless of input row order. The
/// first record of every prefecture gets 0 for all three change fields;
/// downstream consumers never see a missing value here.
fn apply_prefecture_changes(records: &mut [AugmentedRecord]) {
    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (index, record) in records.iter().enumerate() {
        groups
            .entry(record.prefecture.clone())
            .or_default()
            .push(index);
    }

    for indices in groups.values_mut() {
        indices.sort_by_key(|&index| records[index].year);

        let mut previous: Option<usize> = None;
        for &index in indices.iter() {
            match previous {
                None => {
                    let record = &mut records[index];
                    record.population_change = 0.0;
                    record.population_change_pct = 0.0;
                    record.density_change = 0.0;
                }
                Some(previous_index) => {
                    let previous_population = records[previous_index].population;
                    let previous_density = records[previous_index].population_density;
                    let record = &mut records[index];
                    record.population_change = record.population - previous_population;
                    record.density_change = record.population_density - previous_density;
                    record.population_change_pct =
                        percent_change(previous_population, record.population);
                }
            }
            previous = Some(index);
        }
    }
}

/// Percentage change from `previous` to `current`.
///
/// The zero-base cases stay total: 0 → 0 gives 0, 0 → x gives a signed
/// infinity from the underlying division.
fn percent_change(previous: f64, current: f64) -> f64 {
    let pct = (current - previous) / previous * 100.0;
    if pct.is_nan() { 0.0 } else { pct }
}

/// Step 5: dense ranks of population and density within each year.
fn apply_year_ranks(records: &mut [AugmentedRecord]) {
    let mut years: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
    for (index, record) in records.iter().enumerate() {
        years.entry(record.year).or_default().push(index);
    }

    for indices in years.values() {
        assign_dense_ranks(
            records,
            indices,
            |record| record.population,
            |record, rank| record.population_rank = rank,
        );
        assign_dense_ranks(
            records,
            indices,
            |record| record.population_density,
            |record, rank| record.density_rank = rank,
        );
    }
}

/// Assigns descending dense ranks over one year group: rank 1 is the
/// largest value, exact-value ties share a rank, and the next distinct
/// value is ranked exactly one higher.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn assign_dense_ranks<G, S>(records: &mut [AugmentedRecord], indices: &[usize], get: G, set: S)
where
    G: Fn(&AugmentedRecord) -> f64,
    S: Fn(&mut AugmentedRecord, u32),
{
    let mut distinct: Vec<f64> = indices.iter().map(|&index| get(&records[index])).collect();
    distinct.sort_by(|a, b| b.total_cmp(a));
    distinct.dedup();

    for &index in indices {
        let value = get(&records[index]);
        // Ties are exact-value ties; every value is present in `distinct`.
        let rank = distinct.iter().position(|v| *v == value).unwrap_or(0) as u32 + 1;
        set(&mut records[index], rank);
    }
}

/// Step 6: total population per (region, year), joined back by key.
fn apply_region_totals(records: &mut [AugmentedRecord]) {
    let mut totals: BTreeMap<(String, i64), f64> = BTreeMap::new();
    for record in records.iter() {
        *totals
            .entry((record.region.clone(), record.year))
            .or_insert(0.0) += record.population;
    }

    for record in records.iter_mut() {
        record.region_total_population = totals[&(record.region.clone(), record.year)];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(prefecture: &str, year: i64, population: f64, area_km2: f64) -> RawRecord {
        raw_in(prefecture, year, population, area_km2, "Kanto", "Honshu")
    }

    fn raw_in(
        prefecture: &str,
        year: i64,
        population: f64,
        area_km2: f64,
        region: &str,
        island: &str,
    ) -> RawRecord {
        RawRecord {
            prefecture: prefecture.to_owned(),
            year,
            population,
            area_km2,
            capital: "Capital".to_owned(),
            region: region.to_owned(),
            island: island.to_owned(),
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(augment(&[]).is_empty());
    }

    #[test]
    fn two_year_single_prefecture_example() {
        let records = augment(&[
            raw("Tokyo-to", 2000, 12_000_000.0, 2194.0),
            raw("Tokyo-to", 2010, 13_000_000.0, 2194.0),
        ]);

        let later = &records[1];
        assert!((later.population_change - 1_000_000.0).abs() < 1e-9);
        assert!(
            (later.population_change_pct - 100.0 / 12.0).abs() < 1e-9,
            "expected ~8.333%, got {}",
            later.population_change_pct
        );
        assert!((later.population_density - 13_000_000.0 / 2194.0).abs() < 1e-9);
        assert_eq!(later.population_rank, 1);
        assert_eq!(later.density_rank, 1);
        assert_eq!(records[0].population_rank, 1, "alone in its year group");
    }

    #[test]
    fn shares_sum_to_100_within_each_year() {
        let records = augment(&[
            raw("Tokyo-to", 2000, 12_000_000.0, 2194.0),
            raw_in("Osaka-fu", 2000, 8_800_000.0, 1905.0, "Kansai", "Honshu"),
            raw_in("Hokkaido", 2000, 5_700_000.0, 83_424.0, "Hokkaido", "Hokkaido"),
            raw("Tokyo-to", 2010, 13_000_000.0, 2194.0),
            raw_in("Osaka-fu", 2010, 8_900_000.0, 1905.0, "Kansai", "Honshu"),
        ]);

        for year in [2000, 2010] {
            let total: f64 = records
                .iter()
                .filter(|r| r.year == year)
                .map(|r| r.population_share_pct)
                .sum();
            assert!(
                (total - 100.0).abs() < 1e-6,
                "shares for {year} sum to {total}"
            );
        }
    }

    #[test]
    fn first_observation_has_zero_changes() {
        let records = augment(&[
            raw("Tokyo-to", 1950, 6_000_000.0, 2194.0),
            raw("Tokyo-to", 1960, 9_000_000.0, 2194.0),
            raw_in("Osaka-fu", 1960, 5_000_000.0, 1905.0, "Kansai", "Honshu"),
        ]);

        let first_tokyo = records.iter().find(|r| r.year == 1950).unwrap();
        assert!(first_tokyo.population_change.abs() < f64::EPSILON);
        assert!(first_tokyo.population_change_pct.abs() < f64::EPSILON);
        assert!(first_tokyo.density_change.abs() < f64::EPSILON);

        let only_osaka = records.iter().find(|r| r.prefecture == "Osaka-fu").unwrap();
        assert!(only_osaka.population_change.abs() < f64::EPSILON);
    }

    #[test]
    fn changes_follow_year_order_not_input_order() {
        // 2010 appears before 2000 in the input; the difference must still
        // be taken in year-ascending order.
        let records = augment(&[
            raw("Tokyo-to", 2010, 13_000_000.0, 2194.0),
            raw("Tokyo-to", 2000, 12_000_000.0, 2194.0),
        ]);

        assert_eq!(records[0].year, 2010, "input order is preserved");
        assert!((records[0].population_change - 1_000_000.0).abs() < 1e-9);
        assert!(records[1].population_change.abs() < f64::EPSILON);
    }

    #[test]
    fn dense_ranks_share_ties_without_gaps() {
        let records = augment(&[
            raw("Tokyo-to", 2000, 100.0, 10.0),
            raw_in("Osaka-fu", 2000, 100.0, 10.0, "Kansai", "Honshu"),
            raw_in("Hokkaido", 2000, 50.0, 10.0, "Hokkaido", "Hokkaido"),
        ]);

        assert_eq!(records[0].population_rank, 1);
        assert_eq!(records[1].population_rank, 1, "ties share a rank");
        assert_eq!(records[2].population_rank, 2, "dense rank never skips");
        assert_eq!(records[2].density_rank, 2);
    }

    #[test]
    fn ranks_are_scoped_per_year() {
        let records = augment(&[
            raw("Tokyo-to", 2000, 100.0, 10.0),
            raw_in("Osaka-fu", 2000, 200.0, 10.0, "Kansai", "Honshu"),
            raw("Tokyo-to", 2010, 100.0, 10.0),
        ]);

        assert_eq!(records[0].population_rank, 2);
        assert_eq!(records[1].population_rank, 1);
        assert_eq!(records[2].population_rank, 1, "2010 has its own ranking");
    }

    #[test]
    fn unknown_prefecture_keeps_record_without_coords() {
        let records = augment(&[
            raw("Atlantis", 2000, 100.0, 10.0),
            raw("Tokyo-to", 2000, 300.0, 10.0),
        ]);

        let atlantis = &records[0];
        assert_eq!(atlantis.latitude, None);
        assert_eq!(atlantis.longitude, None);
        assert!((atlantis.population_share_pct - 25.0).abs() < 1e-9);
        assert_eq!(atlantis.population_rank, 2);

        assert!(records[1].latitude.is_some());
    }

    #[test]
    fn region_totals_group_by_region_and_year() {
        let records = augment(&[
            raw_in("Tokyo-to", 2000, 100.0, 10.0, "Kanto", "Honshu"),
            raw_in("Saitama-ken", 2000, 50.0, 10.0, "Kanto", "Honshu"),
            raw_in("Osaka-fu", 2000, 70.0, 10.0, "Kansai", "Honshu"),
            raw_in("Tokyo-to", 2010, 120.0, 10.0, "Kanto", "Honshu"),
        ]);

        assert!((records[0].region_total_population - 150.0).abs() < f64::EPSILON);
        assert!((records[1].region_total_population - 150.0).abs() < f64::EPSILON);
        assert!((records[2].region_total_population - 70.0).abs() < f64::EPSILON);
        assert!(
            (records[3].region_total_population - 120.0).abs() < f64::EPSILON,
            "2010 total is independent of 2000"
        );
    }

    #[test]
    fn zero_population_produces_documented_sentinels() {
        let records = augment(&[
            raw("Tokyo-to", 2000, 0.0, 10.0),
            raw("Tokyo-to", 2010, 5.0, 10.0),
        ]);

        assert!(records[0].area_per_person.is_infinite());
        assert!(
            records[0].population_share_pct.abs() < f64::EPSILON,
            "a zero-total year has zero shares"
        );
        assert!(records[0].population_change_pct.abs() < f64::EPSILON);
        assert!(
            records[1].population_change_pct.is_infinite(),
            "growth from a zero base"
        );
        assert!((records[1].population_change - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn output_preserves_input_order() {
        let input = [
            raw("Tokyo-to", 2010, 13_000_000.0, 2194.0),
            raw_in("Hokkaido", 1950, 4_000_000.0, 83_424.0, "Hokkaido", "Hokkaido"),
            raw("Tokyo-to", 2000, 12_000_000.0, 2194.0),
        ];

        let records = augment(&input);
        let got: Vec<(&str, i64)> = records
            .iter()
            .map(|r| (r.prefecture.as_str(), r.year))
            .collect();
        assert_eq!(
            got,
            vec![("Tokyo-to", 2010), ("Hokkaido", 1950), ("Tokyo-to", 2000)]
        );
    }

    #[test]
    fn augment_is_deterministic() {
        let input = [
            raw("Tokyo-to", 2000, 12_000_000.0, 2194.0),
            raw_in("Osaka-fu", 2000, 8_800_000.0, 1905.0, "Kansai", "Honshu"),
            raw("Tokyo-to", 2010, 13_000_000.0, 2194.0),
        ];

        assert_eq!(augment(&input), augment(&input));
    }
}
