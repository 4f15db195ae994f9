//! Convert command implementation
//!
//! Runs a single conversion and prints the run report.

use crate::app::diagnostics::TracingSink;
use crate::app::services::converter::Converter;
use crate::cli::args::{Args, OutputFormat};
use crate::cli::commands::shared::{ConversionStats, setup_logging};
use crate::{Error, Result};

use colored::*;
use indicatif::HumanDuration;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

/// Run the convert command
pub fn run_convert(args: Args) -> Result<ConversionStats> {
    setup_logging(&args)?;

    let start_time = Instant::now();
    let output_format = args.output_format;
    let show_report = args.show_report();
    let config = args.into_config();
    let source_file = config.source_file.clone();

    let summary = Converter::new(config, Arc::new(TracingSink))
        .run()
        .inspect_err(|e| error!("Conversion failed during {} stage: {}", e.stage(), e))?;

    let stats = ConversionStats::from_summary(source_file, &summary, start_time.elapsed());
    info!(
        "Converted {} record(s) in {}",
        stats.records_written,
        HumanDuration(stats.processing_time)
    );

    if show_report {
        generate_final_report(output_format, &stats)?;
    }

    Ok(stats)
}

/// Generate final run report
fn generate_final_report(output_format: OutputFormat, stats: &ConversionStats) -> Result<()> {
    match output_format {
        OutputFormat::Human => generate_human_report(stats),
        OutputFormat::Json => generate_json_report(stats),
    }
}

/// Generate human-readable report
fn generate_human_report(stats: &ConversionStats) -> Result<()> {
    let duration = HumanDuration(stats.processing_time);

    println!("\n{}", "Remarketing Conversion Complete".bright_green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   • Source file: {}", stats.source_file.display());
    println!(
        "   • Records written: {}",
        stats.records_written.to_string().bright_white().bold()
    );
    println!("   • Rows scanned: {}", stats.rows_scanned);
    println!(
        "   • Output file: {} ({})",
        stats.output_file.display(),
        ConversionStats::format_size(stats.output_size)
    );
    println!("   • Processing time: {}", duration);

    if stats.overwrote_existing {
        println!("   {}", "• Existing output file was replaced".yellow());
    }

    println!();
    Ok(())
}

/// Generate JSON report for machine consumption
fn generate_json_report(stats: &ConversionStats) -> Result<()> {
    let json = serde_json::to_string_pretty(stats).map_err(|e| {
        Error::write("<stdout>", "failed to render JSON report", std::io::Error::other(e))
    })?;
    println!("{}", json);
    Ok(())
}
