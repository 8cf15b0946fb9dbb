//! POI Engine Library
//!
//! A Rust library for loading point-of-interest datasets and maintaining the
//! derived state a tag-cloud renderer needs.
//!
//! This library provides tools for:
//! - Loading POI lists from JSON or legacy CSV sources with one-shot format fallback
//! - Recovering text from legacy CSV bytes by trying candidate encodings in order
//! - Assigning font size, color and typeface to each record by list position
//! - Tracking selection and visibility with consistent per-record flags
//! - Guarding overlapping reloads with monotonic load generations

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod decoder;
        pub mod ingestion;
        pub mod poi_store;
        pub mod record_parser;
        pub mod style_assignor;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ColorSettings, FontSettings, Poi, PoiId, VisibleMode};
pub use app::services::ingestion::{IngestionPipeline, LoadStats, SourceFormat};
pub use app::services::poi_store::{PoiStore, PoiStoreHandle};
pub use config::EngineConfig;

/// Result type alias for the POI engine
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for POI ingestion and store operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// No candidate encoding produced usable text
    #[error("Decode error for '{source_name}': {message}")]
    Decode {
        source_name: String,
        message: String,
    },

    /// Payload shape does not match the expected source format
    #[error("Format error in '{source_name}': {message}")]
    Format {
        source_name: String,
        message: String,
    },

    /// Underlying transport failed while fetching a source
    #[error("Fetch error for '{location}': {message}")]
    Fetch {
        location: String,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// JSON (de)serialization failed
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// A mutation referenced an id that is not in the list
    #[error("POI not found: id = {id}")]
    NotFound { id: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A load finished after a newer load had already been started
    #[error("Stale load discarded: generation {generation} superseded by {latest}")]
    StaleLoad { generation: u64, latest: u64 },

    /// Both the preferred and the fallback format failed
    #[error("Ingestion failed: {message}")]
    Ingestion {
        message: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a decode error
    pub fn decode(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a format error
    pub fn format(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Format {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a fetch error
    pub fn fetch(
        location: impl Into<String>,
        message: impl Into<String>,
        source: Option<std::io::Error>,
    ) -> Self {
        Self::Fetch {
            location: location.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a not found error
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a stale load error
    pub fn stale_load(generation: u64, latest: u64) -> Self {
        Self::StaleLoad { generation, latest }
    }

    /// Create a terminal ingestion error wrapping the last failure
    pub fn ingestion(message: impl Into<String>, source: Error) -> Self {
        Self::Ingestion {
            message: message.into(),
            source: Box::new(source),
        }
    }

    /// The innermost error, unwrapping terminal ingestion failures
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::Ingestion { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
