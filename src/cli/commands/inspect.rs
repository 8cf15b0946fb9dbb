//! Inspect command: decode one CSV export and report the recovered records

use super::shared::{format_size, setup_logging};
use crate::app::services::decoder::decode_with_candidates;
use crate::app::services::record_parser::parse_tabular;
use crate::cli::args::InspectArgs;
use crate::constants::DEFAULT_ENCODING_CANDIDATES;
use crate::{Error, Result};
use colored::*;

/// Run the inspect command
pub async fn run_inspect(args: InspectArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false)?;

    let bytes = tokio::fs::read(&args.file)
        .await
        .map_err(|e| Error::io(format!("Failed to read {}", args.file.display()), e))?;

    let candidates: Vec<String> = match &args.encodings {
        Some(list) => list.labels.clone(),
        None => DEFAULT_ENCODING_CANDIDATES.iter().map(|s| s.to_string()).collect(),
    };

    let source_name = args.file.display().to_string();
    let decoded = decode_with_candidates(&bytes, candidates.as_slice(), args.lossy, &source_name)?;
    let output = parse_tabular(&decoded.text);

    println!("{}", "CSV Inspection".bright_green().bold());
    println!("{}", "==============".bright_green());
    println!("{} {}", "File:".bright_white(), source_name.bright_cyan());
    println!("{} {}", "Size:".bright_white(), format_size(bytes.len()));
    println!(
        "{} {} (tried {})",
        "Encoding:".bright_white(),
        decoded.encoding.name().bright_cyan(),
        candidates.join(", ")
    );
    println!(
        "{} {}",
        "Records:".bright_white(),
        output.records.len().to_string().bright_yellow().bold()
    );
    if output.rows_skipped > 0 {
        println!(
            "{} {}",
            "Malformed rows skipped:".bright_white(),
            output.rows_skipped.to_string().yellow()
        );
    }

    if args.limit > 0 && !output.records.is_empty() {
        println!();
        for record in output.records.iter().take(args.limit) {
            println!(
                "  {} {} {} ({:.3}, {:.3})",
                format!("{:>6}", record.id.to_string()).bright_black(),
                record.name.bright_cyan(),
                format!("[{}]", record.city).bright_black(),
                record.lng,
                record.lat
            );
        }
    }

    Ok(())
}
