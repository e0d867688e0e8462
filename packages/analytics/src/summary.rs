//! Aggregations over a filtered view for presentation layers.
//!
//! All functions here are total and return empty output for an empty
//! view; "no data for this selection" is a result, not an error.

use std::collections::BTreeMap;

use population_atlas_analytics_models::{HeatPoint, PrefectureSummary, RegionTrendPoint};
use population_atlas_dataset_models::AugmentedRecord;

/// Per-prefecture mean population and density over the view, sorted by
/// mean population descending and truncated to `limit` entries.
///
/// Means are rounded to 2 decimal places; equal means fall back to
/// prefecture name order so the result is deterministic.
#[must_use]
pub fn top_prefectures_by_mean_population(
    view: &[AugmentedRecord],
    limit: usize,
) -> Vec<PrefectureSummary> {
    let mut sums: BTreeMap<String, (f64, f64, u32)> = BTreeMap::new();
    for record in view.iter() {
        let entry = sums.entry(record.prefecture.clone()).or_insert((0.0, 0.0, 0));
        entry.0 += record.population;
        entry.1 += record.population_density;
        entry.2 += 1;
    }

    let mut summaries: Vec<PrefectureSummary> = sums
        .into_iter()
        .map(|(prefecture, (population, density, count))| PrefectureSummary {
            prefecture,
            mean_population: round2(population / f64::from(count)),
            mean_density: round2(density / f64::from(count)),
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.mean_population
            .total_cmp(&a.mean_population)
            .then_with(|| a.prefecture.cmp(&b.prefecture))
    });
    summaries.truncate(limit);
    summaries
}

/// Total population per (region, year) over the view, sorted by region
/// then year.
#[must_use]
pub fn region_trends(view: &[AugmentedRecord]) -> Vec<RegionTrendPoint> {
    let mut totals: BTreeMap<(String, i64), f64> = BTreeMap::new();
    for record in view.iter() {
        *totals
            .entry((record.region.clone(), record.year))
            .or_insert(0.0) += record.population;
    }

    totals
        .into_iter()
        .map(|((region, year), population)| RegionTrendPoint {
            region,
            year,
            population,
        })
        .collect()
}

/// Weighted map points for density heatmap rendering.
///
/// Records without coordinates are skipped; weights are densities
/// normalized by the view's maximum density, or 0 when that maximum is
/// not positive.
#[must_use]
pub fn heat_points(view: &[AugmentedRecord]) -> Vec<HeatPoint> {
    let max_density = view
        .iter()
        .map(|record| record.population_density)
        .fold(0.0_f64, f64::max);

    view.iter()
        .filter_map(|record| {
            let (latitude, longitude) = record.latitude.zip(record.longitude)?;
            let weight = if max_density > 0.0 {
                record.population_density / max_density
            } else {
                0.0
            };
            Some(HeatPoint {
                latitude,
                longitude,
                weight,
            })
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
