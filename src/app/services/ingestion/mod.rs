//! POI ingestion pipeline
//!
//! Fetches a source payload, decodes and parses it into normalized records,
//! and falls back once to the alternate format when the preferred one fails.
//! The pipeline never touches a store: it hands back a [`LoadedDataset`] that
//! the store installs only when the whole load succeeded.
//!
//! ## Architecture
//!
//! - [`fetcher`] - Byte transport for source locations
//! - [`pipeline`] - Strategy loop over source formats
//! - [`stats`] - Load statistics reported by each successful load

pub mod fetcher;
pub mod pipeline;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use crate::config::{SourceConfig, SourceFormat};
pub use fetcher::{Fetcher, FsFetcher, StaticFetcher};
pub use pipeline::{IngestionPipeline, LoadedDataset};
pub use stats::LoadStats;
