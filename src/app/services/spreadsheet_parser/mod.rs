//! Spreadsheet parser for remarketing exports
//!
//! This module reads the first worksheet of a remarketing workbook and maps
//! its data rows positionally into [`RemarketingRecord`]s.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Workbook loading and row iteration
//! - [`column_mapping`] - Declarative field-to-column table
//! - [`record_parser`] - Terminator detection and single-row parsing
//! - [`field_parsers`] - Cell coercion into text, decimal, integer and date
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use rmk_xls_to_xml::TracingSink;
//! use rmk_xls_to_xml::app::services::spreadsheet_parser::SpreadsheetParser;
//!
//! # fn example() -> rmk_xls_to_xml::Result<()> {
//! let parser = SpreadsheetParser::new(Arc::new(TracingSink));
//! let result = parser.parse_file(std::path::Path::new("repos.xlsx"), 3)?;
//!
//! println!("Parsed {} records from {} rows",
//!          result.stats.records_parsed,
//!          result.stats.rows_scanned);
//! # Ok(())
//! # }
//! ```
//!
//! [`RemarketingRecord`]: crate::app::models::RemarketingRecord

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::{ColumnMapping, RemarketingField, STANDARD_LAYOUT};
pub use parser::SpreadsheetParser;
pub use stats::{ParseResult, ParseStats};
