//! Declarative column layout for remarketing exports
//!
//! The source sheet has no usable header names, so every field is located by
//! a fixed zero-based column offset. The offsets live in a single table
//! ([`STANDARD_LAYOUT`]); moving a column is a change to that table only.

use crate::constants::columns;
use crate::{Error, Result};
use std::fmt;

/// Number of fields in a remarketing record
pub const FIELD_COUNT: usize = columns::COUNT;

/// Fields of a remarketing record, in record order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemarketingField {
    AccountNumber,
    LoanNumber,
    LastName,
    FirstName,
    Balance,
    Year,
    Make,
    Model,
    Vin,
    Mileage,
    RepoAgentName,
    RepoAgentsLookup,
    LocationOfUnit,
    DateOfRepo,
    DateOfClear,
}

impl RemarketingField {
    /// Every field, in record order
    pub const ALL: [RemarketingField; FIELD_COUNT] = [
        Self::AccountNumber,
        Self::LoanNumber,
        Self::LastName,
        Self::FirstName,
        Self::Balance,
        Self::Year,
        Self::Make,
        Self::Model,
        Self::Vin,
        Self::Mileage,
        Self::RepoAgentName,
        Self::RepoAgentsLookup,
        Self::LocationOfUnit,
        Self::DateOfRepo,
        Self::DateOfClear,
    ];

    /// Field name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Self::AccountNumber => "AccountNumber",
            Self::LoanNumber => "LoanNumber",
            Self::LastName => "LastName",
            Self::FirstName => "FirstName",
            Self::Balance => "Balance",
            Self::Year => "Year",
            Self::Make => "Make",
            Self::Model => "Model",
            Self::Vin => "Vin",
            Self::Mileage => "Mileage",
            Self::RepoAgentName => "RepoAgentName",
            Self::RepoAgentsLookup => "RepoAgentsLookup",
            Self::LocationOfUnit => "LocationOfUnit",
            Self::DateOfRepo => "DateOfRepo",
            Self::DateOfClear => "DateOfClear",
        }
    }

    fn position(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for RemarketingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Column offsets of the remarketing export
pub const STANDARD_LAYOUT: &[(RemarketingField, usize)] = &[
    (RemarketingField::AccountNumber, columns::ACCOUNT_NUMBER),
    (RemarketingField::LoanNumber, columns::LOAN_NUMBER),
    (RemarketingField::LastName, columns::LAST_NAME),
    (RemarketingField::FirstName, columns::FIRST_NAME),
    (RemarketingField::Balance, columns::BALANCE),
    (RemarketingField::Year, columns::YEAR),
    (RemarketingField::Make, columns::MAKE),
    (RemarketingField::Model, columns::MODEL),
    (RemarketingField::Vin, columns::VIN),
    (RemarketingField::Mileage, columns::MILEAGE),
    (RemarketingField::RepoAgentName, columns::REPO_AGENT_NAME),
    (RemarketingField::RepoAgentsLookup, columns::REPO_AGENTS_LOOKUP),
    (RemarketingField::LocationOfUnit, columns::LOCATION_OF_UNIT),
    (RemarketingField::DateOfRepo, columns::DATE_OF_REPO),
    (RemarketingField::DateOfClear, columns::DATE_OF_CLEAR),
];

/// Resolved field-to-column mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    indices: [usize; FIELD_COUNT],
}

impl ColumnMapping {
    /// Mapping for the standard remarketing export
    pub fn standard() -> Self {
        let mut indices = [0; FIELD_COUNT];
        for &(field, index) in STANDARD_LAYOUT {
            indices[field.position()] = index;
        }
        Self { indices }
    }

    /// Build a mapping from a layout table
    ///
    /// Every field must appear exactly once and no two fields may share a column.
    pub fn from_layout(layout: &[(RemarketingField, usize)]) -> Result<Self> {
        let mut slots: [Option<usize>; FIELD_COUNT] = [None; FIELD_COUNT];

        for &(field, index) in layout {
            if slots[field.position()].is_some() {
                return Err(Error::configuration(format!(
                    "Column layout maps field {} more than once",
                    field
                )));
            }
            if let Some(other) = RemarketingField::ALL
                .iter()
                .find(|other| slots[other.position()] == Some(index))
            {
                return Err(Error::configuration(format!(
                    "Column layout maps both {} and {} to column {}",
                    other, field, index
                )));
            }
            slots[field.position()] = Some(index);
        }

        let mut indices = [0; FIELD_COUNT];
        for field in RemarketingField::ALL {
            indices[field.position()] = slots[field.position()].ok_or_else(|| {
                Error::configuration(format!("Column layout is missing field {}", field))
            })?;
        }

        Ok(Self { indices })
    }

    /// Column offset of a field
    pub fn index_of(&self, field: RemarketingField) -> usize {
        self.indices[field.position()]
    }
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self::standard()
    }
}
