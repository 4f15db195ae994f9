//! Core spreadsheet parser implementation
//!
//! This module opens the workbook, aligns the first worksheet to absolute sheet
//! coordinates and drives row parsing until the terminator row.

use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use super::column_mapping::ColumnMapping;
use super::record_parser::{is_terminator_row, parse_remarketing_record};
use super::stats::{ParseResult, ParseStats};
use crate::app::diagnostics::DiagnosticSink;
use crate::app::models::RemarketingRecord;
use crate::constants::SOURCE_SHEET_INDEX;
use crate::{Error, Result};

/// Parser for remarketing spreadsheet exports
///
/// Only the first worksheet is read. Header rows are skipped by count, and
/// reading stops at the first row without an account number. A cell that
/// cannot be coerced aborts the whole parse.
pub struct SpreadsheetParser {
    mapping: ColumnMapping,
    sink: Arc<dyn DiagnosticSink>,
}

impl SpreadsheetParser {
    /// Create a parser for the standard column layout
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self::with_mapping(ColumnMapping::standard(), sink)
    }

    /// Create a parser for a custom column layout
    pub fn with_mapping(mapping: ColumnMapping, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { mapping, sink }
    }

    /// Column layout in use
    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    /// Read every remarketing record from a workbook
    pub fn extract(&self, file_path: &Path, header_rows: usize) -> Result<Vec<RemarketingRecord>> {
        Ok(self.parse_file(file_path, header_rows)?.records)
    }

    /// Parse a workbook and return records with statistics
    pub fn parse_file(&self, file_path: &Path, header_rows: usize) -> Result<ParseResult> {
        debug!("Opening workbook: {}", file_path.display());

        let range = load_first_sheet(file_path)?;
        let result = self.parse_range(&range, header_rows)?;

        self.sink.info(&format!(
            "Read {} row(s) from: {}",
            result.stats.records_parsed,
            file_path.display()
        ));

        Ok(result)
    }

    /// Parse an already loaded worksheet
    pub fn parse_range(&self, range: &Range<Data>, header_rows: usize) -> Result<ParseResult> {
        if let (Some(start), Some(end)) = (range.start(), range.end()) {
            debug!("Worksheet used range: {:?} to {:?}", start, end);
        }
        self.parse_rows(sheet_rows(range), header_rows)
    }

    /// Parse a sequence of rows, the first being sheet row 1
    pub fn parse_rows<I, R>(&self, rows: I, header_rows: usize) -> Result<ParseResult>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[Data]>,
    {
        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        for (index, row) in rows.into_iter().enumerate() {
            let row_number = index + 1;

            if index < header_rows {
                stats.header_rows_skipped += 1;
                continue;
            }

            stats.rows_scanned += 1;
            let row = row.as_ref();

            if is_terminator_row(row, &self.mapping) {
                debug!("Row {} has no account number, end of data", row_number);
                stats.terminator_row = Some(row_number);
                break;
            }

            let record = parse_remarketing_record(row, &self.mapping, row_number)?;
            records.push(record);
        }

        stats.records_parsed = records.len();
        debug!(
            "Parsed {} records ({} header rows skipped, {} rows scanned)",
            stats.records_parsed, stats.header_rows_skipped, stats.rows_scanned
        );

        Ok(ParseResult { records, stats })
    }
}

/// Open a workbook and load its first worksheet
pub fn load_first_sheet(file_path: &Path) -> Result<Range<Data>> {
    let path = file_path.display().to_string();

    let mut workbook = open_workbook_auto(file_path).map_err(|e| {
        Error::source_read(&path, "not a readable spreadsheet", Some(e))
    })?;

    workbook
        .worksheet_range_at(SOURCE_SHEET_INDEX)
        .ok_or_else(|| Error::source_read(&path, "workbook has no worksheets", None))?
        .map_err(|e| Error::source_read(&path, "failed to read the first worksheet", Some(e)))
}

/// Rows of a worksheet addressed from sheet row 1, column A
///
/// calamine trims leading empty rows and columns from a range; re-aligning
/// keeps header counting and column offsets relative to the sheet itself.
pub fn sheet_rows(range: &Range<Data>) -> impl Iterator<Item = Vec<Data>> + '_ {
    let (row_count, column_count) = match range.end() {
        Some((end_row, end_col)) if !range.is_empty() => (end_row + 1, end_col + 1),
        _ => (0, 0),
    };

    (0..row_count).map(move |row| {
        (0..column_count)
            .map(|col| range.get_value((row, col)).cloned().unwrap_or(Data::Empty))
            .collect()
    })
}
