//! Field parsing utilities for spreadsheet rows
//!
//! This module provides helper functions for coercing calamine cells into the
//! string, decimal, integer and date values of a remarketing record.

use super::column_mapping::{ColumnMapping, RemarketingField};
use crate::constants::{EXCEL_EPOCH, TEXT_DATE_FORMATS, TEXT_DATETIME_FORMATS};
use crate::{Error, Result};
use calamine::Data;
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Largest Excel serial number that still maps to a date (31 Dec 9999)
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

/// Significant digits kept when a float cell becomes a decimal
const FLOAT_SIGNIFICANT_DIGITS: u32 = 15;

static EMPTY_CELL: Data = Data::Empty;

/// Get the cell at a column offset, treating short rows as empty cells
pub fn cell_at(row: &[Data], index: usize) -> &Data {
    row.get(index).unwrap_or(&EMPTY_CELL)
}

/// Render a cell the way it reads in the sheet
///
/// Numbers use their shortest round-trip form (`2018`, `45000.5`); empty
/// cells become the empty string.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => (if *b { "True" } else { "False" }).to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) => format_naive_datetime(&value),
            None => dt.as_f64().to_string(),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

/// Parse a text field
pub fn parse_text(row: &[Data], mapping: &ColumnMapping, field: RemarketingField) -> String {
    cell_to_string(cell_at(row, mapping.index_of(field)))
}

/// Parse a required decimal field
pub fn parse_required_decimal(
    row: &[Data],
    mapping: &ColumnMapping,
    field: RemarketingField,
    row_number: usize,
) -> Result<Decimal> {
    let index = mapping.index_of(field);
    let cell = cell_at(row, index);
    decimal_from_cell(cell).map_err(|reason| coercion_error(row_number, index, field, cell, reason))
}

/// Parse a required 32-bit integer field
pub fn parse_required_i32(
    row: &[Data],
    mapping: &ColumnMapping,
    field: RemarketingField,
    row_number: usize,
) -> Result<i32> {
    let index = mapping.index_of(field);
    let cell = cell_at(row, index);
    i32_from_cell(cell).map_err(|reason| coercion_error(row_number, index, field, cell, reason))
}

/// Parse a required date field
pub fn parse_required_date(
    row: &[Data],
    mapping: &ColumnMapping,
    field: RemarketingField,
    row_number: usize,
) -> Result<NaiveDate> {
    let index = mapping.index_of(field);
    let cell = cell_at(row, index);
    date_from_cell(cell).map_err(|reason| coercion_error(row_number, index, field, cell, reason))
}

/// Coerce a cell into a decimal
pub fn decimal_from_cell(cell: &Data) -> std::result::Result<Decimal, String> {
    match cell {
        Data::Float(f) => decimal_from_f64(*f),
        Data::Int(i) => Ok(Decimal::from(*i)),
        Data::String(s) => decimal_from_text(s),
        Data::Empty => Err("cell is empty".to_string()),
        other => Err(format!("{} cell is not a number", cell_kind(other))),
    }
}

/// Coerce a cell into a 32-bit integer
pub fn i32_from_cell(cell: &Data) -> std::result::Result<i32, String> {
    match cell {
        Data::Int(i) => {
            i32::try_from(*i).map_err(|_| format!("{} is outside the 32-bit integer range", i))
        }
        Data::Float(f) => i32_from_f64(*f),
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Err("cell is empty".to_string());
            }
            trimmed
                .parse::<i32>()
                .map_err(|e| format!("not an integer: {}", e))
        }
        Data::Empty => Err("cell is empty".to_string()),
        other => Err(format!("{} cell is not an integer", cell_kind(other))),
    }
}

/// Coerce a cell into a calendar date, dropping any time of day
pub fn date_from_cell(cell: &Data) -> std::result::Result<NaiveDate, String> {
    match cell {
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|value| value.date())
            .ok_or_else(|| format!("date serial {} is out of range", dt.as_f64())),
        Data::DateTimeIso(s) => date_from_text(s),
        Data::Float(f) => date_from_excel_serial(*f),
        Data::Int(i) => date_from_excel_serial(*i as f64),
        Data::String(s) => date_from_text(s),
        Data::Empty => Err("cell is empty".to_string()),
        other => Err(format!("{} cell is not a date", cell_kind(other))),
    }
}

/// Parse decimal text with '.' as separator and optional ',' grouping
pub fn decimal_from_text(text: &str) -> std::result::Result<Decimal, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("cell is empty".to_string());
    }

    let normalized: String = trimmed.chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&normalized).map_err(|e| format!("not a decimal number: {}", e))
}

/// Parse date text in one of the accepted short-date or date-time formats
pub fn date_from_text(text: &str) -> std::result::Result<NaiveDate, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("cell is empty".to_string());
    }

    if let Some(date) = TEXT_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
    {
        return Ok(date);
    }

    if let Some(datetime) = TEXT_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    {
        return Ok(datetime.date());
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|_| "not a recognised date (expected MM/DD/YYYY or YYYY-MM-DD)".to_string())
}

/// Convert an Excel 1900-system serial number into a date
pub fn date_from_excel_serial(serial: f64) -> std::result::Result<NaiveDate, String> {
    if !serial.is_finite() || !(1.0..=MAX_EXCEL_SERIAL).contains(&serial) {
        return Err(format!("date serial {} is out of range", serial));
    }

    let (year, month, day) = EXCEL_EPOCH;
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|epoch| epoch.checked_add_days(Days::new(serial.floor() as u64)))
        .ok_or_else(|| format!("date serial {} is out of range", serial))
}

fn decimal_from_f64(value: f64) -> std::result::Result<Decimal, String> {
    if !value.is_finite() {
        return Err(format!("{} is not a finite number", value));
    }
    // Display gives the shortest round-trip digits, never exponent notation
    let decimal = Decimal::from_str(&value.to_string())
        .map_err(|e| format!("{} cannot be represented as a decimal: {}", value, e))?;

    // A double carries 15 reliable significant digits; the rest is binary noise
    Ok(decimal
        .round_sf(FLOAT_SIGNIFICANT_DIGITS)
        .map_or(decimal, |rounded| rounded.normalize()))
}

fn i32_from_f64(value: f64) -> std::result::Result<i32, String> {
    if !value.is_finite() {
        return Err(format!("{} is not a finite number", value));
    }
    let rounded = value.round_ties_even();
    if rounded < i32::MIN as f64 || rounded > i32::MAX as f64 {
        return Err(format!("{} is outside the 32-bit integer range", value));
    }
    Ok(rounded as i32)
}

fn format_naive_datetime(value: &NaiveDateTime) -> String {
    if value.time() == chrono::NaiveTime::MIN {
        value.format("%m/%d/%Y").to_string()
    } else {
        value.format("%m/%d/%Y %H:%M:%S").to_string()
    }
}

fn cell_kind(cell: &Data) -> &'static str {
    match cell {
        Data::Empty => "empty",
        Data::String(_) => "text",
        Data::Int(_) | Data::Float(_) => "numeric",
        Data::Bool(_) => "boolean",
        Data::DateTime(_) | Data::DateTimeIso(_) => "date",
        Data::DurationIso(_) => "duration",
        Data::Error(_) => "error",
    }
}

fn coercion_error(
    row_number: usize,
    index: usize,
    field: RemarketingField,
    cell: &Data,
    reason: String,
) -> Error {
    Error::field_coercion(row_number, index, field.name(), cell_to_string(cell), reason)
}
