//! Filtering of the augmented table into per-interaction views.
//!
//! The filter engine is re-run in full on every interaction; there is no
//! incremental diffing. It never mutates the augmented table, so one
//! table serves any number of filter calls.

use population_atlas_analytics_models::FilterSpec;
use population_atlas_dataset_models::AugmentedRecord;

/// Returns the records matching `spec`, in table order, as an
/// independent owned view.
///
/// An empty prefecture or island selection matches every record; the
/// year range is inclusive on both ends. The engine does not clamp the
/// range to the data — a disjoint range yields an empty view, which is a
/// legitimate result.
#[must_use]
pub fn apply(records: &[AugmentedRecord], spec: &FilterSpec) -> Vec<AugmentedRecord> {
    records
        .iter()
        .filter(|record| matches(record, spec))
        .cloned()
        .collect()
}

/// Whether one record satisfies the filter.
fn matches(record: &AugmentedRecord, spec: &FilterSpec) -> bool {
    // An empty selection set means "match all", not "match none".
    let prefecture_ok =
        spec.prefectures.is_empty() || spec.prefectures.contains(&record.prefecture);
    let island_ok = spec.islands.is_empty() || spec.islands.contains(&record.island);

    prefecture_ok && island_ok && spec.years.contains(record.year)
}

/// Returns the observed (min, max) year of the table, or `None` for an
/// empty table.
///
/// Callers use this to clamp user-supplied year ranges before building a
/// [`FilterSpec`].
#[must_use]
pub fn data_year_bounds(records: &[AugmentedRecord]) -> Option<(i64, i64)> {
    let min = records.iter().map(|record| record.year).min()?;
    let max = records.iter().map(|record| record.year).max()?;
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use population_atlas_analytics_models::YearRange;
    use population_atlas_dataset_models::RawRecord;

    fn table() -> Vec<AugmentedRecord> {
        let raw = [
            ("Tokyo-to", 2000, "Kanto", "Honshu"),
            ("Tokyo-to", 2010, "Kanto", "Honshu"),
            ("Osaka-fu", 2000, "Kansai", "Honshu"),
            ("Hokkaido", 2000, "Hokkaido", "Hokkaido"),
            ("Okinawa-ken", 2010, "Kyushu", "Okinawa"),
        ]
        .map(|(prefecture, year, region, island)| RawRecord {
            prefecture: prefecture.to_owned(),
            year,
            population: 1000.0,
            area_km2: 100.0,
            capital: "Capital".to_owned(),
            region: region.to_owned(),
            island: island.to_owned(),
        });

        crate::augment::augment(&raw)
    }

    fn spec() -> FilterSpec {
        FilterSpec::all_within(YearRange::new(2000, 2010))
    }

    #[test]
    fn empty_selections_match_everything() {
        let records = table();
        let view = apply(&records, &spec());
        assert_eq!(view, records, "empty sets plus full range is the identity");
    }

    #[test]
    fn prefecture_selection_restricts_view() {
        let records = table();
        let mut filter = spec();
        filter.prefectures.insert("Tokyo-to".to_owned());

        let view = apply(&records, &filter);
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|record| record.prefecture == "Tokyo-to"));
    }

    #[test]
    fn island_selection_restricts_view() {
        let records = table();
        let mut filter = spec();
        filter.islands.insert("Honshu".to_owned());

        let view = apply(&records, &filter);
        assert_eq!(view.len(), 3);
        assert!(view.iter().all(|record| record.island == "Honshu"));
    }

    #[test]
    fn selections_combine_conjunctively() {
        let records = table();
        let mut filter = spec();
        filter.prefectures.insert("Tokyo-to".to_owned());
        filter.prefectures.insert("Okinawa-ken".to_owned());
        filter.islands.insert("Okinawa".to_owned());

        let view = apply(&records, &filter);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].prefecture, "Okinawa-ken");
    }

    #[test]
    fn year_range_is_inclusive() {
        let records = table();
        let mut filter = spec();
        filter.years = YearRange::new(2010, 2010);

        let view = apply(&records, &filter);
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|record| record.year == 2010));
    }

    #[test]
    fn disjoint_year_range_yields_empty_view() {
        let records = table();
        let mut filter = spec();
        filter.years = YearRange::new(1800, 1850);

        assert!(apply(&records, &filter).is_empty());
    }

    #[test]
    fn apply_is_idempotent_and_nonmutating() {
        let records = table();
        let before = records.clone();
        let filter = spec();

        let first = apply(&records, &filter);
        let second = apply(&records, &filter);
        assert_eq!(first, second, "same table and filter, same view");
        assert_eq!(records, before, "the augmented table is never mutated");
    }

    #[test]
    fn year_bounds_of_empty_table() {
        assert_eq!(data_year_bounds(&[]), None);
    }

    #[test]
    fn year_bounds_of_table() {
        assert_eq!(data_year_bounds(&table()), Some((2000, 2010)));
    }
}
