//! RMK XLS to XML Library
//!
//! A Rust library for converting remarketing (vehicle repossession) spreadsheet
//! exports into the fixed-schema Remarketing XML document consumed downstream.
//!
//! This library provides tools for:
//! - Reading the first worksheet of an xls/xlsx/ods workbook
//! - Mapping rows positionally into typed remarketing records
//! - Stopping at the first row without an account number
//! - Writing the Remarketing XML document atomically
//! - Reporting each failure with the stage (read, parse, write) that caused it

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod diagnostics;
    pub mod models;
    pub mod services {
        pub mod converter;
        pub mod spreadsheet_parser;
        pub mod xml_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::diagnostics::{DiagnosticSink, MemorySink, TracingSink};
pub use app::models::{RemarketingRecord, RunMetadata};
pub use config::ConverterConfig;

/// Result type alias for the converter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for remarketing conversion
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Source workbook missing, unreadable, or not a spreadsheet
    #[error("Failed to read source file '{path}': {message}")]
    SourceRead {
        path: String,
        message: String,
        #[source]
        source: Option<calamine::Error>,
    },

    /// Source parsed but held no data rows
    #[error("No remarketing data found in file '{path}'")]
    EmptyResult { path: String },

    /// A numeric or date cell could not be coerced
    #[error(
        "Invalid value for {field} at row {row}, column {column}: '{value}' ({reason})"
    )]
    FieldCoercion {
        row: usize,
        column: usize,
        field: String,
        value: String,
        reason: String,
    },

    /// Output file could not be created or written
    #[error("Failed to write output file '{path}': {message}")]
    Write {
        path: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// XML serializer failure
    #[error("XML serialization error: {message}")]
    XmlSerialization { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a source read error with context
    pub fn source_read(
        path: impl Into<String>,
        message: impl Into<String>,
        source: Option<calamine::Error>,
    ) -> Self {
        Self::SourceRead {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an empty result error
    pub fn empty_result(path: impl Into<String>) -> Self {
        Self::EmptyResult { path: path.into() }
    }

    /// Create a field coercion error
    pub fn field_coercion(
        row: usize,
        column: usize,
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::FieldCoercion {
            row,
            column,
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a write error with context
    pub fn write(
        path: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::Write {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an XML serialization error
    pub fn xml_serialization(message: impl Into<String>) -> Self {
        Self::XmlSerialization {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Name of the conversion stage that produced this error
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "configure",
            Self::SourceRead { .. } | Self::EmptyResult { .. } => "read",
            Self::FieldCoercion { .. } => "parse",
            Self::Write { .. } | Self::XmlSerialization { .. } => "write",
        }
    }
}
