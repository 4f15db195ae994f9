//! Parsing statistics and result structures for spreadsheet extraction

use crate::app::models::RemarketingRecord;

/// Parsing result with records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed records, in sheet order
    pub records: Vec<RemarketingRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

impl ParseResult {
    /// Check if no data rows were found
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ParseStats {
    /// Leading rows skipped as headers
    pub header_rows_skipped: usize,

    /// Rows inspected after the header, including the terminator row
    pub rows_scanned: usize,

    /// Records successfully parsed
    pub records_parsed: usize,

    /// 1-based sheet row that ended the data, if the sheet did not just run out
    pub terminator_row: Option<usize>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if parsing stopped at an empty account number
    pub fn stopped_at_terminator(&self) -> bool {
        self.terminator_row.is_some()
    }
}
