//! Load statistics tracking
//!
//! Records what a successful load read, what it dropped and how long it took.

use crate::config::SourceFormat;
use std::time::Duration;

/// Statistics about a single successful load
#[derive(Debug, Clone, PartialEq)]
pub struct LoadStats {
    /// Format that produced the records
    pub format: SourceFormat,

    /// Location the payload was fetched from
    pub location: String,

    /// Encoding accepted by the decoder (CSV sources only)
    pub encoding: Option<String>,

    /// Number of records handed to the store
    pub records_loaded: usize,

    /// Number of malformed rows skipped by the parser
    pub rows_skipped: usize,

    /// Number of records dropped for repeating an earlier id
    pub duplicates_dropped: usize,

    /// Whether the preferred format failed and the alternate was used
    pub fallback_used: bool,

    /// Payload size in bytes
    pub bytes_read: usize,

    /// Wall-clock time from fetch start to parsed records
    pub load_duration: Duration,
}

impl LoadStats {
    /// Create empty statistics for a format and location
    pub fn new(format: SourceFormat, location: impl Into<String>) -> Self {
        Self {
            format,
            location: location.into(),
            encoding: None,
            records_loaded: 0,
            rows_skipped: 0,
            duplicates_dropped: 0,
            fallback_used: false,
            bytes_read: 0,
            load_duration: Duration::ZERO,
        }
    }

    /// Calculate the loading rate in records per second
    pub fn loading_rate(&self) -> f64 {
        if self.load_duration.is_zero() {
            0.0
        } else {
            self.records_loaded as f64 / self.load_duration.as_secs_f64()
        }
    }

    /// Get a summary string of the load
    pub fn summary(&self) -> String {
        let encoding = self
            .encoding
            .as_deref()
            .map(|name| format!(", {}", name))
            .unwrap_or_default();
        let fallback = if self.fallback_used { " (fallback)" } else { "" };

        format!(
            "Loaded {} POIs from {} [{}{}]{} in {:.2}s, {} rows skipped, {} duplicates dropped",
            self.records_loaded,
            self.location,
            self.format,
            encoding,
            fallback,
            self.load_duration.as_secs_f64(),
            self.rows_skipped,
            self.duplicates_dropped
        )
    }
}
