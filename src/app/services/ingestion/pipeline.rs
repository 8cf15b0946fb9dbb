//! Format strategy loop for POI ingestion
//!
//! Each configured format is a strategy. The loop tries the preferred format,
//! returns on the first success, and moves to the alternate format at most
//! once.

use super::fetcher::Fetcher;
use super::stats::LoadStats;
use crate::app::models::SourceRecord;
use crate::app::services::decoder::decode_with_candidates;
use crate::app::services::record_parser::{ParseOutput, parse_structured_bytes, parse_tabular};
use crate::config::{SourceConfig, SourceFormat};
use crate::{Error, Result};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Records produced by a successful load, not yet installed in a store
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub records: Vec<SourceRecord>,
    pub stats: LoadStats,
}

/// Orchestrates fetch, decode and parse for the configured source formats
#[derive(Debug, Clone)]
pub struct IngestionPipeline<F> {
    fetcher: F,
    source: SourceConfig,
}

impl<F: Fetcher> IngestionPipeline<F> {
    /// Create a pipeline over a fetcher and a source configuration
    pub fn new(fetcher: F, source: SourceConfig) -> Self {
        Self { fetcher, source }
    }

    /// Source configuration in use
    pub fn source(&self) -> &SourceConfig {
        &self.source
    }

    /// Load records, falling back once to the alternate format
    ///
    /// # Errors
    /// * Returns `Error::Configuration` if no format has a location
    /// * Returns `Error::Ingestion` wrapping the last failure when every
    ///   strategy failed
    pub async fn run(&self) -> Result<LoadedDataset> {
        let strategies = self.source.strategies();
        if strategies.is_empty() {
            return Err(Error::configuration("no source location configured"));
        }

        let mut last_error = None;

        for (attempt, format) in strategies.iter().copied().enumerate() {
            match self.load_format(format).await {
                Ok(mut dataset) => {
                    dataset.stats.fallback_used = attempt > 0;
                    return Ok(dataset);
                }
                Err(e) => {
                    if let Some(next) = strategies.get(attempt + 1) {
                        warn!("{} load failed ({}), falling back to {}", format, e, next);
                    }
                    last_error = Some(e);
                }
            }
        }

        let error = last_error.unwrap_or_else(|| Error::configuration("no strategy attempted"));
        Err(Error::ingestion(
            format!("all {} source format(s) failed", strategies.len()),
            error,
        ))
    }

    /// Load records using a single format, without fallback
    pub async fn load_format(&self, format: SourceFormat) -> Result<LoadedDataset> {
        let location = self.source.location(format).ok_or_else(|| {
            Error::configuration(format!("no location configured for {} source", format))
        })?;

        info!("Loading POIs from {} ({})", location, format);
        let start_time = Instant::now();

        let bytes = self.fetcher.fetch(location).await?;
        let mut stats = LoadStats::new(format, location);
        stats.bytes_read = bytes.len();

        let output: ParseOutput = match format {
            SourceFormat::Json => parse_structured_bytes(&bytes, location)?,
            SourceFormat::Csv => {
                let decoded = decode_with_candidates(
                    &bytes,
                    self.source.encodings.as_slice(),
                    self.source.lossy_decoding,
                    location,
                )?;
                stats.encoding = Some(decoded.encoding.name().to_string());
                parse_tabular(&decoded.text)
            }
        };

        stats.records_loaded = output.records.len();
        stats.rows_skipped = output.rows_skipped;
        stats.load_duration = start_time.elapsed();

        debug!(
            "{} bytes from {} parsed into {} records",
            stats.bytes_read, location, stats.records_loaded
        );
        info!(
            "Loaded {} POIs from {} in {:.2}s",
            stats.records_loaded,
            location,
            stats.load_duration.as_secs_f64()
        );

        Ok(LoadedDataset {
            records: output.records,
            stats,
        })
    }
}
