//! Tests for cell coercion helpers

use crate::app::services::spreadsheet_parser::column_mapping::{ColumnMapping, RemarketingField};
use crate::app::services::spreadsheet_parser::field_parsers::*;
use crate::Error;
use calamine::{CellErrorType, Data};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_cell_to_string_renders_numbers_like_the_sheet() {
    assert_eq!(cell_to_string(&Data::Float(2018.0)), "2018");
    assert_eq!(cell_to_string(&Data::Float(45000.5)), "45000.5");
    assert_eq!(cell_to_string(&Data::Int(42)), "42");
    assert_eq!(cell_to_string(&Data::Empty), "");
    assert_eq!(cell_to_string(&Data::Bool(true)), "True");
    assert_eq!(cell_to_string(&Data::String("  Ford ".to_string())), "  Ford ");
}

#[test]
fn test_cell_at_pads_short_rows() {
    let row = vec![Data::String("A1".to_string())];
    assert_eq!(cell_at(&row, 0), &Data::String("A1".to_string()));
    assert_eq!(cell_at(&row, 14), &Data::Empty);
}

#[test]
fn test_decimal_from_cell() {
    assert_eq!(
        decimal_from_cell(&Data::Float(12500.75)).unwrap(),
        Decimal::from_str("12500.75").unwrap()
    );
    assert_eq!(decimal_from_cell(&Data::Int(900)).unwrap(), Decimal::from(900));
    assert_eq!(
        decimal_from_cell(&Data::String("1,234.56".to_string())).unwrap(),
        Decimal::from_str("1234.56").unwrap()
    );
    assert!(decimal_from_cell(&Data::String("n/a".to_string())).is_err());
    assert!(decimal_from_cell(&Data::Empty).is_err());
    assert!(decimal_from_cell(&Data::Bool(false)).is_err());
}

#[test]
fn test_decimal_from_float_drops_binary_noise() {
    let sum = decimal_from_cell(&Data::Float(0.1 + 0.2)).unwrap();
    assert_eq!(sum, Decimal::from_str("0.3").unwrap());
    assert_eq!(sum.to_string(), "0.3");

    let total = decimal_from_cell(&Data::Float(8250.1 + 0.2)).unwrap();
    assert_eq!(total.to_string(), "8250.3");

    assert_eq!(decimal_from_cell(&Data::Float(12000.0)).unwrap().to_string(), "12000");
    assert_eq!(decimal_from_cell(&Data::Float(8250.4)).unwrap().to_string(), "8250.4");
}

#[test]
fn test_i32_from_cell() {
    assert_eq!(i32_from_cell(&Data::Float(45000.0)).unwrap(), 45000);
    assert_eq!(i32_from_cell(&Data::Int(7)).unwrap(), 7);
    assert_eq!(i32_from_cell(&Data::String(" 1200 ".to_string())).unwrap(), 1200);

    // Fractions round half to even
    assert_eq!(i32_from_cell(&Data::Float(45000.5)).unwrap(), 45000);
    assert_eq!(i32_from_cell(&Data::Float(45001.5)).unwrap(), 45002);

    assert!(i32_from_cell(&Data::String("lots".to_string())).is_err());
    assert!(i32_from_cell(&Data::Float(1e12)).is_err());
    assert!(i32_from_cell(&Data::Int(i64::from(i32::MAX) + 1)).is_err());
    assert!(i32_from_cell(&Data::Error(CellErrorType::Div0)).is_err());
}

#[test]
fn test_date_from_cell() {
    assert_eq!(date_from_cell(&Data::Float(45306.0)).unwrap(), date(2024, 1, 15));
    assert_eq!(date_from_cell(&Data::Float(45306.75)).unwrap(), date(2024, 1, 15));
    assert_eq!(date_from_cell(&Data::Int(45323)).unwrap(), date(2024, 2, 1));
    assert_eq!(
        date_from_cell(&Data::DateTimeIso("2024-03-10T08:15:00".to_string())).unwrap(),
        date(2024, 3, 10)
    );
    assert!(date_from_cell(&Data::Empty).is_err());
    assert!(date_from_cell(&Data::Float(-3.0)).is_err());
}

#[test]
fn test_date_from_text_formats() {
    assert_eq!(date_from_text("03/10/2024").unwrap(), date(2024, 3, 10));
    assert_eq!(date_from_text("2024-03-10").unwrap(), date(2024, 3, 10));
    assert_eq!(date_from_text("2024-03-10 14:30:00").unwrap(), date(2024, 3, 10));
    assert_eq!(date_from_text("3/10/2024 2:30:00 PM").unwrap(), date(2024, 3, 10));
    assert!(date_from_text("10th March").is_err());
    assert!(date_from_text("13/45/2024").is_err());
}

#[test]
fn test_date_from_excel_serial_bounds() {
    assert_eq!(date_from_excel_serial(1.0).unwrap(), date(1899, 12, 31));
    assert!(date_from_excel_serial(0.0).is_err());
    assert!(date_from_excel_serial(f64::NAN).is_err());
    assert!(date_from_excel_serial(3_000_000.0).is_err());
}

#[test]
fn test_required_field_error_names_row_and_field() {
    let mapping = ColumnMapping::standard();
    let mut row = vec![Data::Empty; 15];
    row[9] = Data::String("lots".to_string());

    let error = parse_required_i32(&row, &mapping, RemarketingField::Mileage, 6).unwrap_err();
    match error {
        Error::FieldCoercion {
            row,
            column,
            field,
            value,
            ..
        } => {
            assert_eq!(row, 6);
            assert_eq!(column, 9);
            assert_eq!(field, "Mileage");
            assert_eq!(value, "lots");
        }
        other => panic!("Expected FieldCoercion, got {:?}", other),
    }
}

#[test]
fn test_parse_text_reads_mapped_column() {
    let mapping = ColumnMapping::standard();
    let mut row = vec![Data::Empty; 15];
    row[5] = Data::Float(2018.0);

    assert_eq!(parse_text(&row, &mapping, RemarketingField::Year), "2018");
    assert_eq!(parse_text(&row, &mapping, RemarketingField::Make), "");
}
