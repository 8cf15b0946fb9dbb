use anyhow::anyhow;
use clap::Parser;
use poi_engine::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result: anyhow::Result<()> = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result.map_err(anyhow::Error::from),
            signal = tokio::signal::ctrl_c() => match signal {
                Ok(()) => {
                    eprintln!("\nReceived CTRL+C, shutting down...");
                    Err(anyhow!("Load interrupted by user"))
                }
                Err(e) => Err(anyhow!("Failed to install CTRL+C signal handler: {}", e)),
            },
        }
    });

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("POI Engine - Tag-cloud POI loader");
    println!("=================================");
    println!();
    println!("Load point-of-interest datasets from JSON or legacy CSV exports and");
    println!("assign the cyclic font sizes and colors used by tag-cloud renderers.");
    println!();
    println!("USAGE:");
    println!("    poi-engine <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    load        Load a dataset, falling back between formats");
    println!("    inspect     Decode a single CSV export and report what was recovered");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Load data/chinapoi.json, falling back to data/chinapoi.csv:");
    println!("    poi-engine load");
    println!();
    println!("    # Load a legacy export only, trying GBK first:");
    println!("    poi-engine load --csv exports/pois.csv -e gbk,utf-8");
    println!();
    println!("    # Dump the styled records as JSON:");
    println!("    poi-engine load --output-format json > pois.json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    poi-engine <COMMAND> --help");
}
