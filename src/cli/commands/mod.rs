//! Command implementations for the POI engine CLI
//!
//! Each command lives in its own module:
//! - `load`: full pipeline run with a styled store and a summary
//! - `inspect`: decode a single CSV export and show what was recovered

pub mod inspect;
pub mod load;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch to the subcommand handler
///
/// Returns `Ok(())` without doing anything when no subcommand was given.
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Load(load_args)) => load::run_load(load_args).await,
        Some(Commands::Inspect(inspect_args)) => inspect::run_inspect(inspect_args).await,
        None => Ok(()),
    }
}
