//! Configuration management and validation.
//!
//! Provides configuration structures for data sources, decoding policy and
//! the initial style settings a store starts with.

use crate::app::models::{ColorSettings, FontSettings};
use crate::constants;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Supported source payload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Array (or map) of JSON field objects
    Json,
    /// Legacy comma-separated layout in a legacy encoding
    Csv,
}

impl SourceFormat {
    /// The other format, used for the single fallback attempt
    pub fn alternate(&self) -> Self {
        match self {
            SourceFormat::Json => SourceFormat::Csv,
            SourceFormat::Csv => SourceFormat::Json,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Json => write!(f, "json"),
            SourceFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Where to load POIs from and how to decode them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceConfig {
    /// Location of the JSON source (None = not available)
    pub json_location: Option<String>,

    /// Location of the legacy CSV source (None = not available)
    pub csv_location: Option<String>,

    /// Format tried first
    pub preferred: SourceFormat,

    /// Try the alternate format once if the preferred one fails
    pub fallback_enabled: bool,

    /// Candidate encoding labels for CSV bytes, tried in order
    pub encodings: Vec<String>,

    /// Accept text containing replacement characters
    pub lossy_decoding: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            json_location: Some(constants::DEFAULT_JSON_SOURCE.to_string()),
            csv_location: Some(constants::DEFAULT_CSV_SOURCE.to_string()),
            preferred: SourceFormat::Json,
            fallback_enabled: true,
            encodings: constants::DEFAULT_ENCODING_CANDIDATES
                .iter()
                .map(|label| label.to_string())
                .collect(),
            lossy_decoding: false,
        }
    }
}

impl SourceConfig {
    /// Location configured for a format
    pub fn location(&self, format: SourceFormat) -> Option<&str> {
        match format {
            SourceFormat::Json => self.json_location.as_deref(),
            SourceFormat::Csv => self.csv_location.as_deref(),
        }
    }

    /// Formats to try, in order
    ///
    /// The preferred format comes first; the alternate follows only when
    /// fallback is enabled. Formats without a location are left out.
    pub fn strategies(&self) -> Vec<SourceFormat> {
        let mut formats = vec![self.preferred];
        if self.fallback_enabled {
            formats.push(self.preferred.alternate());
        }
        formats.retain(|format| self.location(*format).is_some());
        formats
    }

    /// Set only a JSON source
    pub fn json_only(location: impl Into<String>) -> Self {
        Self {
            json_location: Some(location.into()),
            csv_location: None,
            preferred: SourceFormat::Json,
            ..Default::default()
        }
    }

    /// Set only a CSV source
    pub fn csv_only(location: impl Into<String>) -> Self {
        Self {
            json_location: None,
            csv_location: Some(location.into()),
            preferred: SourceFormat::Csv,
            ..Default::default()
        }
    }

    /// Set the preferred format
    pub fn with_preferred(mut self, format: SourceFormat) -> Self {
        self.preferred = format;
        self
    }

    /// Disable the fallback attempt
    pub fn without_fallback(mut self) -> Self {
        self.fallback_enabled = false;
        self
    }

    /// Set candidate encodings
    pub fn with_encodings<I, S>(mut self, encodings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.encodings = encodings.into_iter().map(Into::into).collect();
        self
    }

    /// Accept lossy decoding
    pub fn with_lossy_decoding(mut self) -> Self {
        self.lossy_decoding = true;
        self
    }

    /// Validate source settings
    pub fn validate(&self) -> Result<()> {
        if self.json_location.is_none() && self.csv_location.is_none() {
            return Err(Error::configuration("no source location configured"));
        }

        if self.csv_location.is_some() && self.encodings.is_empty() {
            return Err(Error::configuration(
                "CSV source configured without candidate encodings",
            ));
        }

        Ok(())
    }
}

/// Global configuration for the POI engine
///
/// Config files use camelCase keys in every section, matching the settings
/// payloads (`fontSizes`, `discreteMethod`, ...):
///
/// ```json
/// {
///   "source": { "jsonLocation": "data/chinapoi.json", "fallbackEnabled": true },
///   "font": { "fontSizes": [64, 52, 44] },
///   "honorSourceStyles": false
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Source locations and decoding policy
    pub source: SourceConfig,

    /// Initial font settings
    pub font: FontSettings,

    /// Initial color settings
    pub color: ColorSettings,

    /// Apply source-provided fontSize/fontColor after the initial assignment
    pub honor_source_styles: bool,
}

impl EngineConfig {
    /// Load configuration from a JSON file and validate it
    ///
    /// Missing keys take their default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        let config: Self = serde_json::from_str(&text).map_err(|e| {
            Error::json(format!("Invalid config file {}", path.display()), e)
        })?;

        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Default config file location in the user config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(constants::CONFIG_DIR_NAME)
                .join(constants::CONFIG_FILE_NAME)
        })
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.source.validate()?;
        self.font.validate()?;
        self.color.validate()?;
        Ok(())
    }

    /// Replace the source configuration
    pub fn with_source(mut self, source: SourceConfig) -> Self {
        self.source = source;
        self
    }

    /// Replace the initial font settings
    pub fn with_font(mut self, font: FontSettings) -> Self {
        self.font = font;
        self
    }

    /// Replace the initial color settings
    pub fn with_color(mut self, color: ColorSettings) -> Self {
        self.color = color;
        self
    }

    /// Keep source-provided style overrides on load
    pub fn with_source_styles(mut self) -> Self {
        self.honor_source_styles = true;
        self
    }
}
