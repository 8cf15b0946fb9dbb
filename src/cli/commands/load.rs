//! Load command: run the ingestion pipeline into a store and report it

use super::shared::{display_location, format_size, load_configuration, setup_logging};
use crate::app::models::Poi;
use crate::app::services::ingestion::{FsFetcher, IngestionPipeline};
use crate::app::services::poi_store::{PoiStore, PoiStoreHandle};
use crate::cli::args::{LoadArgs, OutputFormat};
use crate::{Error, LoadStats, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::info;

/// Run the load command
pub async fn run_load(args: LoadArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;
    args.validate()?;

    let config = load_configuration(&args)?;

    let fetcher = match &args.data_dir {
        Some(dir) => FsFetcher::with_base_dir(dir.clone()),
        None => FsFetcher::new(),
    };
    let pipeline = IngestionPipeline::new(fetcher, config.source.clone());
    let handle = PoiStoreHandle::new(PoiStore::from_config(&config)?);

    info!("Starting load with {} strategy(ies)", config.source.strategies().len());
    let spinner = create_spinner(!args.quiet && args.output_format == OutputFormat::Human);
    let result = handle.load(&pipeline).await;
    spinner.finish_and_clear();
    let stats = result?;

    let store = handle.lock().await;
    match args.output_format {
        OutputFormat::Json => {
            let visible: Vec<&Poi> = store.visible_list();
            let json = serde_json::to_string_pretty(&visible)
                .map_err(|e| Error::json("Failed to serialize POI list", e))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            if !args.quiet {
                print_summary(&stats, &store, args.limit);
            }
        }
    }

    Ok(())
}

/// Spinner shown while the pipeline runs; hidden when output is not for a human
fn create_spinner(visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Loading POIs...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_summary(stats: &LoadStats, store: &PoiStore, limit: usize) {
    println!();
    println!("{}", "Load Summary".bright_green().bold());
    println!("{}", "============".bright_green());
    println!(
        "{} {} ({})",
        "Source:".bright_white(),
        display_location(&stats.location).bright_cyan(),
        stats.format.to_string().bright_cyan()
    );
    if let Some(encoding) = &stats.encoding {
        println!("{} {}", "Encoding:".bright_white(), encoding.bright_cyan());
    }
    if stats.fallback_used {
        println!("{}", "Preferred format failed, alternate format used".yellow());
    }
    println!(
        "{} {} ({})",
        "Records:".bright_white(),
        stats.records_loaded.to_string().bright_yellow().bold(),
        format_size(stats.bytes_read)
    );
    if stats.rows_skipped > 0 {
        println!(
            "{} {}",
            "Malformed rows skipped:".bright_white(),
            stats.rows_skipped.to_string().yellow()
        );
    }
    if stats.duplicates_dropped > 0 {
        println!(
            "{} {}",
            "Duplicate ids dropped:".bright_white(),
            stats.duplicates_dropped.to_string().yellow()
        );
    }
    println!(
        "{} {:.2}s ({:.0} records/s)",
        "Duration:".bright_white(),
        stats.load_duration.as_secs_f64(),
        stats.loading_rate()
    );

    let pois = store.visible_list();
    if pois.is_empty() || limit == 0 {
        return;
    }

    println!();
    for poi in pois.iter().take(limit) {
        println!(
            "  {} {} {} {}",
            format!("{:>6}", poi.id.to_string()).bright_black(),
            poi.name.bright_cyan(),
            format!("[{}]", poi.city).bright_black(),
            format!("{}px {}", poi.font_size, poi.font_color).bright_black()
        );
    }
    if pois.len() > limit {
        println!("  {}", format!("... and {} more", pois.len() - limit).bright_black());
    }
}
