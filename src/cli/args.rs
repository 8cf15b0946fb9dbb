//! Command-line argument definitions for the POI engine
//!
//! Defines the CLI surface using the clap derive API. Arguments only carry
//! user intent; they are folded into an [`EngineConfig`](crate::EngineConfig)
//! by the command layer.

use crate::config::SourceFormat;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the POI engine
///
/// Loads point-of-interest datasets for tag-cloud rendering, recovering
/// legacy-encoded CSV exports and assigning display styles.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "poi-engine",
    version,
    about = "Load and style point-of-interest datasets for tag-cloud rendering",
    long_about = "Loads point-of-interest datasets from JSON or legacy CSV exports, falling back \
                  between formats and recovering legacy text encodings, then assigns cyclic font \
                  sizes and palette colors the way the tag-cloud renderer expects."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load a dataset through the full pipeline and report the result
    Load(LoadArgs),
    /// Decode a single CSV export and report what was recovered
    Inspect(InspectArgs),
}

/// Arguments for the load command
#[derive(Debug, Clone, Parser)]
pub struct LoadArgs {
    /// Directory that relative source locations resolve against
    #[arg(
        short = 'd',
        long = "data-dir",
        value_name = "PATH",
        help = "Directory that relative source locations resolve against"
    )]
    pub data_dir: Option<PathBuf>,

    /// Location of the JSON source
    #[arg(long = "json", value_name = "LOCATION", help = "Location of the JSON source")]
    pub json_location: Option<String>,

    /// Location of the legacy CSV source
    #[arg(long = "csv", value_name = "LOCATION", help = "Location of the legacy CSV source")]
    pub csv_location: Option<String>,

    /// Format tried first
    #[arg(long = "prefer", value_enum, value_name = "FORMAT", help = "Source format tried first")]
    pub prefer: Option<FormatArg>,

    /// Do not fall back to the alternate format
    #[arg(long = "no-fallback", help = "Do not fall back to the alternate format")]
    pub no_fallback: bool,

    /// Candidate encodings for CSV bytes (comma-separated, tried in order)
    #[arg(
        short = 'e',
        long = "encodings",
        value_name = "LIST",
        help = "Comma-separated candidate encodings for CSV sources",
        long_help = "Candidate encodings for CSV bytes as a comma-separated list, tried in order.\n\
                     Labels follow the WHATWG Encoding Standard, e.g. gb18030, gbk, big5, utf-8.\n\n\
                     If not specified, uses: gb18030,gbk,utf-8"
    )]
    pub encodings: Option<EncodingList>,

    /// Accept text with undecodable bytes replaced
    #[arg(long = "lossy", help = "Accept text with undecodable bytes replaced")]
    pub lossy: bool,

    /// Apply fontSize/fontColor carried by source records
    #[arg(long = "source-styles", help = "Apply fontSize/fontColor carried by source records")]
    pub source_styles: bool,

    /// Path to configuration file
    ///
    /// JSON configuration file. If not specified, looks for
    /// ~/.config/poi-engine/config.json
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Output format for the loaded records
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Number of records to list in human output
    #[arg(
        short = 'n',
        long = "limit",
        value_name = "COUNT",
        default_value_t = 10,
        help = "Number of records to list in human output"
    )]
    pub limit: usize,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// CSV file to decode
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Candidate encodings (comma-separated, tried in order)
    #[arg(
        short = 'e',
        long = "encodings",
        value_name = "LIST",
        help = "Comma-separated candidate encodings"
    )]
    pub encodings: Option<EncodingList>,

    /// Accept text with undecodable bytes replaced
    #[arg(long = "lossy", help = "Accept text with undecodable bytes replaced")]
    pub lossy: bool,

    /// Number of records to print
    #[arg(
        short = 'n',
        long = "limit",
        value_name = "COUNT",
        default_value_t = 5,
        help = "Number of records to print"
    )]
    pub limit: usize,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Source format as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Csv,
}

impl From<FormatArg> for SourceFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => SourceFormat::Json,
            FormatArg::Csv => SourceFormat::Csv,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Human,
    /// Visible records as a JSON array
    Json,
}

/// Wrapper for parsing comma-separated encoding labels
#[derive(Debug, Clone)]
pub struct EncodingList {
    pub labels: Vec<String>,
}

impl FromStr for EncodingList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let labels: Vec<String> = s
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if labels.is_empty() {
            return Err(Error::configuration("Encoding list cannot be empty"));
        }

        // Reject labels the decoder could never use
        for label in &labels {
            if encoding_rs::Encoding::for_label(label.as_bytes()).is_none() {
                return Err(Error::configuration(format!("Unknown encoding '{}'", label)));
            }
        }

        Ok(EncodingList { labels })
    }
}

/// Map verbosity flags to a tracing level name
fn log_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        return "error";
    }

    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

impl LoadArgs {
    /// Get the appropriate log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }

    /// Validate the load command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(data_dir) = &self.data_dir {
            if !data_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Data directory does not exist: {}",
                    data_dir.display()
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }
}

impl InspectArgs {
    pub fn get_log_level(&self) -> &'static str {
        log_level(false, self.verbose)
    }
}
