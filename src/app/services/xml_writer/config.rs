//! Configuration and outcome for XML writer operations

use crate::constants::{DEFAULT_DATE_FORMAT, XML_INDENT_SIZE};
use crate::{Error, Result};
use chrono::format::{Item, StrftimeItems};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration for Remarketing document rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// chrono pattern for `FileCreateDate`, `RepoDate` and `ClearDate`
    /// Default: `%m/%d/%Y`
    pub date_format: String,

    /// Spaces per nesting level
    /// Default: 2
    pub indent_size: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            indent_size: XML_INDENT_SIZE,
        }
    }
}

impl WriterConfig {
    /// Create a new WriterConfig with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the short-date pattern
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Set the indentation width
    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        validate_date_format(&self.date_format)
    }
}

/// Check that a chrono date pattern is usable for rendering
///
/// chrono panics when an invalid pattern is displayed, so patterns are checked
/// before any document is rendered.
pub fn validate_date_format(date_format: &str) -> Result<()> {
    if date_format.trim().is_empty() {
        return Err(Error::configuration("Date format cannot be empty"));
    }
    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        return Err(Error::configuration(format!(
            "Invalid date format pattern: '{}'",
            date_format
        )));
    }
    Ok(())
}

/// Result of a successful document write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteOutcome {
    /// Final path of the document
    pub output_path: PathBuf,

    /// Number of `RemarketingAssignment` elements written
    pub assignments_written: usize,

    /// Size of the document in bytes
    pub bytes_written: u64,

    /// Whether an existing file was replaced
    pub overwrote_existing: bool,
}
