//! End-to-end conversion of a remarketing workbook into its XML document
//!
//! Extraction runs to completion before anything is written. A run that finds
//! no data rows fails without touching the output directory.

use crate::app::diagnostics::DiagnosticSink;
use crate::app::models::RunMetadata;
use crate::app::services::spreadsheet_parser::{ParseStats, SpreadsheetParser};
use crate::app::services::xml_writer::{WriteOutcome, XmlWriter};
use crate::config::ConverterConfig;
use crate::{Error, Result};

use chrono::{DateTime, Local};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Result of a successful conversion
#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    /// Row statistics from the source sheet
    pub parse_stats: ParseStats,

    /// Metadata written into `FileInfo`
    pub metadata: RunMetadata,

    /// Where and how the document was written
    pub outcome: WriteOutcome,
}

/// Sequential extract-then-emit pipeline
pub struct Converter {
    config: ConverterConfig,
    sink: Arc<dyn DiagnosticSink>,
    created_at: Option<DateTime<Local>>,
}

impl Converter {
    pub fn new(config: ConverterConfig, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            config,
            sink,
            created_at: None,
        }
    }

    /// Fix the document creation time instead of using the wall clock
    pub fn with_created_at(mut self, created_at: DateTime<Local>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Run the conversion
    pub fn run(&self) -> Result<ConversionSummary> {
        self.config.validate()?;

        let source_file = self.config.source_file();
        info!("Converting {}", source_file.display());

        let parser = SpreadsheetParser::new(Arc::clone(&self.sink));
        let parsed = parser.parse_file(source_file, self.config.header_rows)?;
        debug!("Parse statistics: {:?}", parsed.stats);

        if parsed.is_empty() {
            return Err(Error::empty_result(source_file.display().to_string()));
        }

        let mut metadata = RunMetadata::for_records(self.config.client_id.clone(), &parsed.records);
        if let Some(created_at) = self.created_at {
            metadata = metadata.with_created_at(created_at);
        }

        let output_path = self.config.output_file_path()?;
        let writer = XmlWriter::with_config(self.config.writer_config(), Arc::clone(&self.sink));
        let outcome = writer.emit(&parsed.records, &metadata, &output_path)?;

        Ok(ConversionSummary {
            parse_stats: parsed.stats,
            metadata,
            outcome,
        })
    }
}

/// Convert a workbook according to `config`
pub fn convert(config: ConverterConfig, sink: Arc<dyn DiagnosticSink>) -> Result<ConversionSummary> {
    Converter::new(config, sink).run()
}
