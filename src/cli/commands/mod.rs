//! Command implementations for the remarketing converter CLI
//!
//! The tool has a single command; [`convert`] holds its workflow and
//! [`shared`] the statistics and logging helpers it uses.

pub mod convert;
pub mod shared;

// Re-export the main types for callers of `run`
pub use shared::ConversionStats;

use crate::Result;
use crate::cli::args::Args;

/// Main command runner for the converter
pub fn run(args: Args) -> Result<ConversionStats> {
    convert::run_convert(args)
}
