//! Command-line argument definitions for the remarketing converter
//!
//! This module defines the CLI interface using the clap derive API. The short
//! flags follow the established tool: `-s` source, `-r` RSA client id, `-o`
//! output directory and `-h` header rows, so help is available as `--help`.

use crate::config::ConverterConfig;
use crate::constants::{DEFAULT_DATE_FORMAT, DEFAULT_HEADER_ROWS, DEFAULT_OUTPUT_PATH};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the remarketing spreadsheet converter
///
/// Reads the first worksheet of a remarketing export and writes the
/// Remarketing XML document next to the configured output directory.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rmk-xls-to-xml",
    version,
    about = "Convert a remarketing spreadsheet export into Remarketing XML",
    long_about = "Reads the first worksheet of a remarketing (vehicle repossession) export, \
                  skips the header rows, maps each row into an assignment until the first row \
                  without an account number, and writes <source name>.xml into the output \
                  directory.",
    disable_help_flag = true
)]
pub struct Args {
    /// Source spreadsheet (xls, xlsx, xlsm, xlsb or ods)
    #[arg(
        short = 's',
        long = "source-file",
        value_name = "FILE",
        help = "Source spreadsheet to convert"
    )]
    pub source_file: PathBuf,

    /// RSA client identifier written into the FileInfo block
    #[arg(
        short = 'r',
        long = "rsa-client-id",
        value_name = "ID",
        help = "RSA client id written into FileInfo"
    )]
    pub rsa_client_id: String,

    /// Output directory for the generated document
    ///
    /// Will be created if it doesn't exist. The document is named after the
    /// source file with an .xml extension.
    #[arg(
        short = 'o',
        long = "output-path",
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_PATH,
        help = "Output directory for the generated document"
    )]
    pub output_path: PathBuf,

    /// Number of leading header rows to skip
    #[arg(
        short = 'h',
        long = "header-rows",
        value_name = "COUNT",
        default_value_t = DEFAULT_HEADER_ROWS,
        help = "Number of leading header rows to skip"
    )]
    pub header_rows: usize,

    /// chrono pattern for dates written into the document
    #[arg(
        long = "date-format",
        value_name = "PATTERN",
        default_value = DEFAULT_DATE_FORMAT,
        help = "Date pattern for FileCreateDate, RepoDate and ClearDate"
    )]
    pub date_format: String,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the run report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the run report"
    )]
    pub output_format: OutputFormat,

    /// Print help
    #[arg(long = "help", action = ArgAction::Help, help = "Print help")]
    help: Option<bool>,
}

/// Output format options for the run report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the log level based on verbosity and quiet flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if the run report should be printed
    pub fn show_report(&self) -> bool {
        !self.quiet
    }

    /// Build the run configuration from the arguments
    pub fn into_config(self) -> ConverterConfig {
        ConverterConfig::new(self.source_file, self.rsa_client_id)
            .with_output_path(self.output_path)
            .with_header_rows(self.header_rows)
            .with_date_format(self.date_format)
    }
}
