//! Core XML writer implementation for Remarketing documents
//!
//! This module renders records and run metadata into the fixed-schema
//! Remarketing document and writes it to disk in a single atomic step.

use crate::app::diagnostics::DiagnosticSink;
use crate::app::models::{RemarketingRecord, RunMetadata};
use crate::app::services::xml_writer::config::{WriteOutcome, WriterConfig};
use crate::app::services::xml_writer::utils::parent_directory;
use crate::constants::{VEHICLE_AT_CUSTOMER_SITE, XML_INDENT_CHAR, elements};
use crate::{Error, Result};

use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;
use tracing::debug;

type DocumentWriter = Writer<Vec<u8>>;

/// Writer for the Remarketing XML document
///
/// The whole document is rendered in memory first. Nothing touches the
/// destination until rendering has succeeded, and the file then appears in
/// one rename, so a failed run never leaves a partial document behind.
pub struct XmlWriter {
    config: WriterConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl XmlWriter {
    /// Create a writer with default settings
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self::with_config(WriterConfig::default(), sink)
    }

    /// Create a writer with custom settings
    pub fn with_config(config: WriterConfig, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Render the document and write it to `output_path`
    ///
    /// An existing file at `output_path` is replaced; this is reported as a
    /// warning through the diagnostic sink, not treated as an error.
    pub fn emit(
        &self,
        records: &[RemarketingRecord],
        metadata: &RunMetadata,
        output_path: &Path,
    ) -> Result<WriteOutcome> {
        let document = self.render_document(records, metadata)?;

        let overwrote_existing = output_path.exists();
        if overwrote_existing {
            self.sink.warning(&format!(
                "Output file already exists and will be overwritten: {}",
                output_path.display()
            ));
        }

        persist_atomically(&document, output_path)?;

        self.sink.info(&format!(
            "Wrote {} assignment(s) to: {}",
            records.len(),
            output_path.display()
        ));

        Ok(WriteOutcome {
            output_path: output_path.to_path_buf(),
            assignments_written: records.len(),
            bytes_written: document.len() as u64,
            overwrote_existing,
        })
    }

    /// Render the complete document into memory
    pub fn render_document(
        &self,
        records: &[RemarketingRecord],
        metadata: &RunMetadata,
    ) -> Result<Vec<u8>> {
        self.config.validate()?;

        let mut writer =
            Writer::new_with_indent(Vec::new(), XML_INDENT_CHAR, self.config.indent_size);

        write_event(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)),
        )?;
        start_element(&mut writer, elements::ROOT)?;

        self.write_file_info(&mut writer, metadata)?;

        if records.is_empty() {
            write_event(
                &mut writer,
                Event::Empty(BytesStart::new(elements::ASSIGNMENT_LIST)),
            )?;
        } else {
            start_element(&mut writer, elements::ASSIGNMENT_LIST)?;
            for record in records {
                self.write_assignment(&mut writer, record)?;
            }
            end_element(&mut writer, elements::ASSIGNMENT_LIST)?;
        }

        end_element(&mut writer, elements::ROOT)?;

        let document = writer.into_inner();
        debug!(
            "Rendered {} assignment(s) into {} bytes",
            records.len(),
            document.len()
        );
        Ok(document)
    }

    fn write_file_info(&self, writer: &mut DocumentWriter, metadata: &RunMetadata) -> Result<()> {
        start_element(writer, elements::FILE_INFO)?;
        text_element(writer, elements::RSA_CLIENT_ID, &metadata.client_id)?;
        text_element(
            writer,
            elements::FILE_CREATE_DATE,
            &metadata.file_create_date(&self.config.date_format),
        )?;
        text_element(writer, elements::ITEM_COUNT, &metadata.item_count.to_string())?;
        end_element(writer, elements::FILE_INFO)
    }

    fn write_assignment(&self, writer: &mut DocumentWriter, record: &RemarketingRecord) -> Result<()> {
        start_element(writer, elements::ASSIGNMENT)?;

        text_element(writer, elements::VIN, record.vin())?;
        text_element(writer, elements::ACCOUNT_NUMBER, record.account_number())?;
        text_element(writer, elements::YEAR, record.year())?;
        text_element(writer, elements::MAKE, record.make())?;
        text_element(writer, elements::MODEL, record.model())?;
        text_element(writer, elements::MILEAGE, &record.mileage().to_string())?;
        text_element(writer, elements::REPO_DATE, &self.format_date(record.date_of_repo()))?;
        text_element(writer, elements::CLEAR_DATE, &self.format_date(record.date_of_clear()))?;
        text_element(writer, elements::LOAN_BALANCE_AMT, &record.balance_invariant())?;

        start_element(writer, elements::VEHICLE_LOCATION_INFO)?;
        text_element(
            writer,
            elements::IS_VEHICLE_AT_CUSTOMER_SITE,
            VEHICLE_AT_CUSTOMER_SITE,
        )?;
        text_element(writer, elements::LOCATION_NAME, record.location_of_unit())?;
        end_element(writer, elements::VEHICLE_LOCATION_INFO)?;

        start_element(writer, elements::CUSTOMER_INFO)?;
        text_element(writer, elements::FULL_NAME, &record.full_name())?;
        end_element(writer, elements::CUSTOMER_INFO)?;

        end_element(writer, elements::ASSIGNMENT)
    }

    fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.config.date_format).to_string()
    }
}

fn write_event(writer: &mut DocumentWriter, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::xml_serialization(e.to_string()))
}

fn start_element(writer: &mut DocumentWriter, name: &str) -> Result<()> {
    write_event(writer, Event::Start(BytesStart::new(name)))
}

fn end_element(writer: &mut DocumentWriter, name: &str) -> Result<()> {
    write_event(writer, Event::End(BytesEnd::new(name)))
}

/// Write a text-only element; empty values become self-closing elements
fn text_element(writer: &mut DocumentWriter, name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return write_event(writer, Event::Empty(BytesStart::new(name)));
    }
    start_element(writer, name)?;
    // BytesText::new escapes markup characters
    write_event(writer, Event::Text(BytesText::new(value)))?;
    end_element(writer, name)
}

/// Write a document next to its destination, then rename it into place
fn persist_atomically(document: &[u8], output_path: &Path) -> Result<()> {
    let path = output_path.display().to_string();
    let directory = parent_directory(output_path);

    let mut temp_file = NamedTempFile::new_in(directory)
        .map_err(|e| Error::write(&path, "failed to create temporary file", e))?;

    temp_file
        .write_all(document)
        .map_err(|e| Error::write(&path, "failed to write document", e))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| Error::write(&path, "failed to flush document", e))?;

    temp_file
        .persist(output_path)
        .map_err(|e| Error::write(&path, "failed to move document into place", e.error))?;

    debug!("Persisted {} bytes to {}", document.len(), path);
    Ok(())
}
