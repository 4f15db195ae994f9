//! Shared components for CLI commands
//!
//! This module contains the run statistics, logging setup and formatting
//! helpers used by the convert command.

use crate::app::services::converter::ConversionSummary;
use crate::cli::args::Args;
use crate::{Error, Result};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Conversion statistics for the run report
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionStats {
    /// Source workbook
    pub source_file: PathBuf,
    /// Generated document
    pub output_file: PathBuf,
    /// Assignments written to the document
    pub records_written: usize,
    /// Header rows skipped
    pub header_rows_skipped: usize,
    /// Rows inspected after the header
    pub rows_scanned: usize,
    /// Size of the document in bytes
    pub output_size: u64,
    /// Whether an existing document was replaced
    pub overwrote_existing: bool,
    /// Total processing time
    #[serde(serialize_with = "serialize_seconds", rename = "processing_time_seconds")]
    pub processing_time: Duration,
}

impl ConversionStats {
    /// Build statistics from a finished conversion
    pub fn from_summary(
        source_file: PathBuf,
        summary: &ConversionSummary,
        processing_time: Duration,
    ) -> Self {
        Self {
            source_file,
            output_file: summary.outcome.output_path.clone(),
            records_written: summary.outcome.assignments_written,
            header_rows_skipped: summary.parse_stats.header_rows_skipped,
            rows_scanned: summary.parse_stats.rows_scanned,
            output_size: summary.outcome.bytes_written,
            overwrote_existing: summary.outcome.overwrote_existing,
            processing_time,
        }
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
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
}

fn serialize_seconds<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // RUST_LOG takes precedence over the command-line level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rmk_xls_to_xml={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
