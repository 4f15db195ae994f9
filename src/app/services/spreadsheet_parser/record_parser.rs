//! Individual row parsing for remarketing sheets
//!
//! This module decides whether a row terminates the data section and turns
//! data rows into [`RemarketingRecord`]s.

use calamine::Data;

use super::column_mapping::{ColumnMapping, RemarketingField};
use super::field_parsers::{
    cell_at, cell_to_string, parse_required_date, parse_required_decimal, parse_required_i32,
    parse_text,
};
use crate::Result;
use crate::app::models::RemarketingRecord;

/// Check if a row marks the end of the data section
///
/// The data ends at the first row whose account number is empty or missing.
/// A whitespace-only account is still data. Nothing after the terminator is
/// data, even if populated.
pub fn is_terminator_row(row: &[Data], mapping: &ColumnMapping) -> bool {
    let cell = cell_at(row, mapping.index_of(RemarketingField::AccountNumber));
    cell_to_string(cell).is_empty()
}

/// Parse a single data row into a remarketing record
///
/// `row_number` is the 1-based sheet row, used only in error messages.
pub fn parse_remarketing_record(
    row: &[Data],
    mapping: &ColumnMapping,
    row_number: usize,
) -> Result<RemarketingRecord> {
    use RemarketingField::*;

    let account_number = parse_text(row, mapping, AccountNumber);
    let loan_number = parse_text(row, mapping, LoanNumber);
    let last_name = parse_text(row, mapping, LastName);
    let first_name = parse_text(row, mapping, FirstName);
    let balance = parse_required_decimal(row, mapping, Balance, row_number)?;
    let year = parse_text(row, mapping, Year);
    let make = parse_text(row, mapping, Make);
    let model = parse_text(row, mapping, Model);
    let vin = parse_text(row, mapping, Vin);
    let mileage = parse_required_i32(row, mapping, Mileage, row_number)?;
    let repo_agent_name = parse_text(row, mapping, RepoAgentName);
    let repo_agents_lookup = parse_text(row, mapping, RepoAgentsLookup);
    let location_of_unit = parse_text(row, mapping, LocationOfUnit);
    let date_of_repo = parse_required_date(row, mapping, DateOfRepo, row_number)?;
    let date_of_clear = parse_required_date(row, mapping, DateOfClear, row_number)?;

    RemarketingRecord::new(
        account_number,
        loan_number,
        last_name,
        first_name,
        balance,
        year,
        make,
        model,
        vin,
        mileage,
        repo_agent_name,
        repo_agents_lookup,
        location_of_unit,
        date_of_repo,
        date_of_clear,
    )
}
