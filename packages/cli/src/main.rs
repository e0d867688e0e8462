#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for exploring the prefecture population dataset.
//!
//! Loads the CSV source, augments it with derived metrics (through the
//! content-keyed cache), applies the requested filter, and either prints
//! a summary or exports the filtered view as CSV.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use population_atlas_analytics::AugmentCache;
use population_atlas_analytics::summary::{
    heat_points, region_trends, top_prefectures_by_mean_population,
};
use population_atlas_analytics_models::{FilterSpec, YearRange};
use population_atlas_dataset_models::AugmentedRecord;
use strum_macros::{Display, EnumString};

#[derive(Parser)]
#[command(name = "population_atlas", about = "Japan prefecture population explorer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the filtered view's row count and summary statistics
    Show {
        #[command(flatten)]
        query: QueryArgs,
        /// Output format ("text" or "json")
        #[arg(long, default_value = "text")]
        format: String,
        /// Number of prefectures in the ranking summary
        #[arg(long, default_value = "5")]
        top: usize,
    },
    /// Export the filtered view as a CSV file
    Export {
        #[command(flatten)]
        query: QueryArgs,
        /// Output file path
        #[arg(long)]
        output: PathBuf,
    },
    /// List the prefectures of the coordinate table
    Prefectures,
}

/// Data source and filter selection shared by `show` and `export`.
#[derive(Args)]
struct QueryArgs {
    /// Path to the population CSV file
    #[arg(long)]
    data: PathBuf,
    /// Prefecture to keep (repeatable); all prefectures when omitted
    #[arg(long = "prefecture")]
    prefectures: Vec<String>,
    /// Island to keep (repeatable); all islands when omitted
    #[arg(long = "island")]
    islands: Vec<String>,
    /// First year to keep; the data's earliest year when omitted
    #[arg(long)]
    from_year: Option<i64>,
    /// Last year to keep; the data's latest year when omitted
    #[arg(long)]
    to_year: Option<i64>,
}

/// Output format for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let mut cache = AugmentCache::new();

    match cli.command {
        Commands::Show { query, format, top } => {
            let format = format
                .parse()
                .map_err(|_| format!("unknown output format: {format}"))?;
            show(&mut cache, &query, format, top)
        }
        Commands::Export { query, output } => export(&mut cache, &query, &output),
        Commands::Prefectures => {
            prefectures();
            Ok(())
        }
    }
}

/// Loads, augments, and filters per the query.
///
/// The requested year range is clamped to the data's observed bounds
/// before it reaches the filter engine.
fn build_view(
    cache: &mut AugmentCache,
    query: &QueryArgs,
) -> Result<Vec<AugmentedRecord>, Box<dyn std::error::Error>> {
    let (raw, key) = population_atlas_dataset::load_path_fingerprinted(&query.data)?;
    let table = cache.get_or_compute(&key, || population_atlas_analytics::augment(&raw));

    let Some((min_year, max_year)) = population_atlas_analytics::data_year_bounds(&table) else {
        return Ok(Vec::new());
    };

    let start = query.from_year.map_or(min_year, |year| year.max(min_year));
    let end = query.to_year.map_or(max_year, |year| year.min(max_year));

    let spec = FilterSpec {
        prefectures: query.prefectures.iter().cloned().collect(),
        islands: query.islands.iter().cloned().collect(),
        years: YearRange::new(start, end),
    };

    let view = population_atlas_analytics::apply(&table, &spec);
    log::info!("Filter matched {} of {} records", view.len(), table.len());
    Ok(view)
}

fn show(
    cache: &mut AugmentCache,
    query: &QueryArgs,
    format: OutputFormat,
    top: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let view = build_view(cache, query)?;
    let summaries = top_prefectures_by_mean_population(&view, top);
    let trends = region_trends(&view);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "rows": view.len(),
                "topPrefectures": summaries,
                "regionTrends": trends,
                "heatPoints": heat_points(&view),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!("Filtered data: {} rows", view.len());

            if view.is_empty() {
                println!("No data for this selection.");
                return Ok(());
            }

            println!();
            println!("Top {} prefectures by average population", summaries.len());
            for (position, summary) in summaries.iter().enumerate() {
                println!(
                    "  {}. {} - population {:.2}, density {:.2}",
                    position + 1,
                    summary.prefecture,
                    summary.mean_population,
                    summary.mean_density
                );
            }

            println!();
            println!("Regional population trends");
            for trend in &trends {
                println!("  {} {}: {}", trend.region, trend.year, trend.population);
            }
        }
    }

    Ok(())
}

fn export(
    cache: &mut AugmentCache,
    query: &QueryArgs,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let view = build_view(cache, query)?;
    population_atlas_export::write_path(output, &view)?;
    println!("Exported {} rows to {}", view.len(), output.display());
    Ok(())
}

fn prefectures() {
    for prefecture in population_atlas_geography::PREFECTURES {
        // Every listed prefecture has coordinates; the table is closed.
        let Some((lat, lon)) = population_atlas_geography::coords(prefecture) else {
            continue;
        };
        println!("{prefecture} ({lat}, {lon})");
    }
}
