//! Shared components for CLI commands
//!
//! Logging setup, configuration layering and output helpers used by more
//! than one command.

use crate::cli::args::LoadArgs;
use crate::config::{EngineConfig, SourceConfig, SourceFormat};
use crate::Result;
use std::path::Path;
use tracing::{debug, info};

/// Set up structured logging on stderr
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("poi_engine={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using a layered approach (defaults -> file -> args)
pub fn load_configuration(args: &LoadArgs) -> Result<EngineConfig> {
    let default_config_path = if args.config_file.is_none() {
        EngineConfig::default_path()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_deref()
            .filter(|path| path.exists()),
    };

    let mut config = match config_file {
        Some(path) => {
            info!("Using config file: {}", path.display());
            EngineConfig::from_json_file(path)?
        }
        None => {
            info!("No config file found, using defaults");
            EngineConfig::default()
        }
    };

    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
///
/// Naming only one location on the command line restricts the load to that
/// format.
pub fn apply_cli_overrides(config: &mut EngineConfig, args: &LoadArgs) {
    let source: &mut SourceConfig = &mut config.source;

    match (&args.json_location, &args.csv_location) {
        (Some(json), Some(csv)) => {
            source.json_location = Some(json.clone());
            source.csv_location = Some(csv.clone());
        }
        (Some(json), None) => {
            source.json_location = Some(json.clone());
            source.csv_location = None;
            source.preferred = SourceFormat::Json;
        }
        (None, Some(csv)) => {
            source.json_location = None;
            source.csv_location = Some(csv.clone());
            source.preferred = SourceFormat::Csv;
        }
        (None, None) => {}
    }

    if let Some(prefer) = args.prefer {
        source.preferred = prefer.into();
    }
    if args.no_fallback {
        source.fallback_enabled = false;
    }
    if let Some(encodings) = &args.encodings {
        source.encodings = encodings.labels.clone();
    }
    if args.lossy {
        source.lossy_decoding = true;
    }
    if args.source_styles {
        config.honor_source_styles = true;
    }
}

/// Format a byte count in human-readable form
pub fn format_size(bytes: usize) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}

/// Short display label for a location
pub fn display_location(location: &str) -> String {
    Path::new(location)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| location.to_string())
}
