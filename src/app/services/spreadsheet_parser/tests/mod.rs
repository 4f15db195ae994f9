//! Test utilities for spreadsheet parser testing
//!
//! This module provides in-memory row builders and real `.xlsx` fixture
//! writers shared by the parser, converter and writer tests.

use calamine::Data;
use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::SpreadsheetParser;
use crate::app::diagnostics::MemorySink;

mod field_parsers_tests;

/// Excel serial for 2024-01-15
pub const SERIAL_2024_01_15: f64 = 45306.0;

/// Excel serial for 2024-02-01
pub const SERIAL_2024_02_01: f64 = 45323.0;

/// Helper to create a parser that records diagnostics in memory
pub fn create_test_parser() -> (SpreadsheetParser, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    (SpreadsheetParser::new(sink.clone()), sink)
}

/// Column labels of the export's last header row
pub const HEADER_LABELS: [&str; 15] = [
    "Account", "Loan", "Last", "First", "Balance", "Year", "Make", "Model", "VIN", "Miles",
    "Agent", "Agent Lookup", "Location", "Repo Date", "Clear Date",
];

/// Helper to create a header row of labels
pub fn header_row() -> Vec<Data> {
    HEADER_LABELS
        .iter()
        .map(|label| Data::String(label.to_string()))
        .collect()
}

/// Helper to create a complete data row with native cell types
pub fn data_row(account: &str, first_name: &str, last_name: &str) -> Vec<Data> {
    vec![
        Data::String(account.to_string()),
        Data::String(format!("L-{}", account)),
        Data::String(last_name.to_string()),
        Data::String(first_name.to_string()),
        Data::Float(12500.75),
        Data::Float(2018.0),
        Data::String("Toyota".to_string()),
        Data::String("Camry".to_string()),
        Data::String("4T1BF1FK5CU123456".to_string()),
        Data::Float(45000.0),
        Data::String("Acme Recovery".to_string()),
        Data::String("ACME-01".to_string()),
        Data::String("Dallas Lot 4".to_string()),
        Data::Float(SERIAL_2024_01_15),
        Data::Float(SERIAL_2024_02_01),
    ]
}

/// Helper to create a row whose account number cell is empty
pub fn terminator_row() -> Vec<Data> {
    let mut row = data_row("", "Ghost", "Row");
    row[0] = Data::Empty;
    row
}

/// A single cell of an `.xlsx` fixture
#[derive(Debug, Clone)]
pub enum FixtureCell {
    Text(String),
    Number(f64),
    Date(f64),
    Blank,
}

impl FixtureCell {
    pub fn text(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Helper to build fixture rows: three header rows then one row per account
///
/// An empty account string leaves the account cell blank.
pub fn fixture_rows(accounts: &[&str]) -> Vec<Vec<FixtureCell>> {
    let mut rows = vec![
        vec![FixtureCell::text("Remarketing Export")],
        vec![FixtureCell::text("Generated for testing")],
        HEADER_LABELS.iter().map(|label| FixtureCell::text(label)).collect(),
    ];

    for (index, account) in accounts.iter().enumerate() {
        let account_cell = if account.is_empty() {
            FixtureCell::Blank
        } else {
            FixtureCell::text(account)
        };
        rows.push(vec![
            account_cell,
            FixtureCell::Text(format!("LN{}", index + 1)),
            FixtureCell::text("Smith"),
            FixtureCell::text("Jane"),
            FixtureCell::Number(1234.5),
            FixtureCell::Number(2019.0),
            FixtureCell::text("Ford"),
            FixtureCell::text("F-150"),
            FixtureCell::Text(format!("1FTFW1E5XKFA0000{}", index)),
            FixtureCell::Number(30000.0 + index as f64),
            FixtureCell::text("Acme Recovery"),
            FixtureCell::text("ACME-01"),
            FixtureCell::text("Main Street Lot"),
            FixtureCell::Date(SERIAL_2024_01_15),
            FixtureCell::Date(SERIAL_2024_02_01),
        ]);
    }

    rows
}

/// Helper to write an `.xlsx` fixture with a single worksheet
pub fn write_xlsx_fixture(dir: &Path, file_name: &str, rows: &[Vec<FixtureCell>]) -> PathBuf {
    let path = dir.join(file_name);
    let date_format = Format::new().set_num_format("mm/dd/yyyy");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row_index, row) in rows.iter().enumerate() {
        let row_number = row_index as u32;
        for (col_index, cell) in row.iter().enumerate() {
            let col = col_index as u16;
            match cell {
                FixtureCell::Text(value) => {
                    worksheet.write_string(row_number, col, value).unwrap();
                }
                FixtureCell::Number(value) => {
                    worksheet.write_number(row_number, col, *value).unwrap();
                }
                FixtureCell::Date(serial) => {
                    worksheet
                        .write_number_with_format(row_number, col, *serial, &date_format)
                        .unwrap();
                }
                FixtureCell::Blank => {}
            }
        }
    }

    workbook.save(&path).unwrap();
    path
}
