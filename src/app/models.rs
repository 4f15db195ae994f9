//! Data models for remarketing conversion
//!
//! This module contains the typed record built from one spreadsheet row and
//! the per-run metadata written into the document's `FileInfo` block.

use crate::{Error, Result};
use chrono::{DateTime, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

// =============================================================================
// Remarketing Record
// =============================================================================

/// One repossessed vehicle assignment read from a data row
///
/// Records are immutable once built: the parser constructs them and the
/// writer only reads them through the accessors below.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemarketingRecord {
    account_number: String,
    loan_number: String,
    last_name: String,
    first_name: String,
    balance: Decimal,
    year: String,
    make: String,
    model: String,
    vin: String,
    mileage: i32,
    repo_agent_name: String,
    repo_agents_lookup: String,
    location_of_unit: String,
    date_of_repo: NaiveDate,
    date_of_clear: NaiveDate,
}

impl RemarketingRecord {
    /// Create a new record, rejecting an empty account number
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        account_number: String,
        loan_number: String,
        last_name: String,
        first_name: String,
        balance: Decimal,
        year: String,
        make: String,
        model: String,
        vin: String,
        mileage: i32,
        repo_agent_name: String,
        repo_agents_lookup: String,
        location_of_unit: String,
        date_of_repo: NaiveDate,
        date_of_clear: NaiveDate,
    ) -> Result<Self> {
        if account_number.is_empty() {
            return Err(Error::configuration(
                "Remarketing record requires a non-empty account number",
            ));
        }

        Ok(Self {
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
        })
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn loan_number(&self) -> &str {
        &self.loan_number
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn vin(&self) -> &str {
        &self.vin
    }

    pub fn mileage(&self) -> i32 {
        self.mileage
    }

    /// Repossession agent; parsed but not part of the current output schema
    pub fn repo_agent_name(&self) -> &str {
        &self.repo_agent_name
    }

    /// Repossession agent lookup key; parsed but not part of the current output schema
    pub fn repo_agents_lookup(&self) -> &str {
        &self.repo_agents_lookup
    }

    pub fn location_of_unit(&self) -> &str {
        &self.location_of_unit
    }

    pub fn date_of_repo(&self) -> NaiveDate {
        self.date_of_repo
    }

    pub fn date_of_clear(&self) -> NaiveDate {
        self.date_of_clear
    }

    /// Customer display name: first name, a space, then last name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Loan balance rendered with a '.' separator and no grouping
    pub fn balance_invariant(&self) -> String {
        self.balance.to_string()
    }
}

// =============================================================================
// Run Metadata
// =============================================================================

/// Per-run values written into the document's `FileInfo` block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunMetadata {
    /// RSA client identifier, passed through verbatim
    pub client_id: String,

    /// Wall-clock time the document was created
    pub created_at: DateTime<Local>,

    /// Number of assignments in the document
    pub item_count: usize,
}

impl RunMetadata {
    /// Create metadata stamped with the current local time
    pub fn new(client_id: impl Into<String>, item_count: usize) -> Self {
        Self {
            client_id: client_id.into(),
            created_at: Local::now(),
            item_count,
        }
    }

    /// Build metadata for a record sequence
    pub fn for_records(client_id: impl Into<String>, records: &[RemarketingRecord]) -> Self {
        Self::new(client_id, records.len())
    }

    /// Override the creation time
    pub fn with_created_at(mut self, created_at: DateTime<Local>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Creation date in the given short-date pattern
    pub fn file_create_date(&self, date_format: &str) -> String {
        self.created_at.date_naive().format(date_format).to_string()
    }
}
