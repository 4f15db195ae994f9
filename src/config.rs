//! Configuration management and validation.
//!
//! Provides the run configuration for a single conversion: where the source
//! workbook is, where the document goes, the client it is addressed to and
//! how the sheet is laid out.

use crate::app::services::xml_writer::config::{WriterConfig, validate_date_format};
use crate::app::services::xml_writer::utils::{create_output_path, ensure_output_directory};
use crate::constants::{DEFAULT_DATE_FORMAT, DEFAULT_HEADER_ROWS, DEFAULT_OUTPUT_PATH};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Run configuration for a remarketing conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Source workbook (xls, xlsx, xlsm, xlsb or ods)
    pub source_file: PathBuf,

    /// Directory the document is written into
    pub output_path: PathBuf,

    /// RSA client identifier written into `FileInfo`
    pub client_id: String,

    /// Leading rows skipped before data
    pub header_rows: usize,

    /// chrono pattern for dates in the document
    pub date_format: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            source_file: PathBuf::new(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            client_id: String::new(),
            header_rows: DEFAULT_HEADER_ROWS,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl ConverterConfig {
    /// Create configuration for a source file and client
    pub fn new(source_file: impl Into<PathBuf>, client_id: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            client_id: client_id.into(),
            ..Self::default()
        }
    }

    /// Set the output directory
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Set the number of header rows
    pub fn with_header_rows(mut self, header_rows: usize) -> Self {
        self.header_rows = header_rows;
        self
    }

    /// Set the date pattern
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Validate the configuration and prepare the output directory
    ///
    /// The output directory is created when missing.
    pub fn validate(&self) -> Result<()> {
        if self.source_file.as_os_str().is_empty() {
            return Err(Error::configuration("Source file path cannot be empty"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(Error::configuration("Output path cannot be empty"));
        }
        if self.client_id.trim().is_empty() {
            return Err(Error::configuration("RSA client id cannot be empty"));
        }

        if !self.source_file.exists() {
            return Err(Error::configuration(format!(
                "Source file does not exist: {}",
                self.source_file.display()
            )));
        }
        if !self.source_file.is_file() {
            return Err(Error::configuration(format!(
                "Source path is not a file: {}",
                self.source_file.display()
            )));
        }

        validate_date_format(&self.date_format)?;
        ensure_output_directory(&self.output_path)?;

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }

    /// Path of the document this run writes
    pub fn output_file_path(&self) -> Result<PathBuf> {
        create_output_path(&self.source_file, &self.output_path)
    }

    /// Source workbook path
    pub fn source_file(&self) -> &Path {
        &self.source_file
    }

    /// Writer settings derived from this configuration
    pub fn writer_config(&self) -> WriterConfig {
        WriterConfig::new().with_date_format(self.date_format.clone())
    }
}
