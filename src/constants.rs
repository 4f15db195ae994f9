//! Application constants for the remarketing converter
//!
//! This module contains default values, the source column layout and the
//! element names of the Remarketing XML document.

// =============================================================================
// Run Defaults
// =============================================================================

/// Number of leading header rows in the remarketing export
pub const DEFAULT_HEADER_ROWS: usize = 3;

/// Output directory used when none is given
pub const DEFAULT_OUTPUT_PATH: &str = ".";

/// Short-date pattern for `FileCreateDate`, `RepoDate` and `ClearDate`
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Extension of the generated document
pub const OUTPUT_EXTENSION: &str = "xml";

/// Index of the only worksheet that is read
pub const SOURCE_SHEET_INDEX: usize = 0;

// =============================================================================
// Source Column Layout
// =============================================================================

/// Zero-based column offsets of the remarketing export
pub mod columns {
    pub const ACCOUNT_NUMBER: usize = 0;
    pub const LOAN_NUMBER: usize = 1;
    pub const LAST_NAME: usize = 2;
    pub const FIRST_NAME: usize = 3;
    pub const BALANCE: usize = 4;
    pub const YEAR: usize = 5;
    pub const MAKE: usize = 6;
    pub const MODEL: usize = 7;
    pub const VIN: usize = 8;
    pub const MILEAGE: usize = 9;
    pub const REPO_AGENT_NAME: usize = 10;
    pub const REPO_AGENTS_LOOKUP: usize = 11;
    pub const LOCATION_OF_UNIT: usize = 12;
    pub const DATE_OF_REPO: usize = 13;
    pub const DATE_OF_CLEAR: usize = 14;

    /// Number of columns the layout spans
    pub const COUNT: usize = 15;
}

// =============================================================================
// Date Parsing
// =============================================================================

/// Text date formats accepted in date columns, tried in order
pub const TEXT_DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%m-%d-%Y", "%Y/%m/%d"];

/// Text date-time formats accepted in date columns, tried in order
pub const TEXT_DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Day zero of the Excel 1900 date system (accounts for the 1900 leap-year bug)
pub const EXCEL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

// =============================================================================
// Remarketing XML Schema
// =============================================================================

/// Element names of the Remarketing document, in document order
pub mod elements {
    pub const ROOT: &str = "Remarketing";

    pub const FILE_INFO: &str = "FileInfo";
    pub const RSA_CLIENT_ID: &str = "RSAClientID";
    pub const FILE_CREATE_DATE: &str = "FileCreateDate";
    pub const ITEM_COUNT: &str = "ItemCount";

    pub const ASSIGNMENT_LIST: &str = "RemarketingAssignmentList";
    pub const ASSIGNMENT: &str = "RemarketingAssignment";
    pub const VIN: &str = "VIN";
    pub const ACCOUNT_NUMBER: &str = "AccountNumber";
    pub const YEAR: &str = "Year";
    pub const MAKE: &str = "Make";
    pub const MODEL: &str = "Model";
    pub const MILEAGE: &str = "Mileage";
    pub const REPO_DATE: &str = "RepoDate";
    pub const CLEAR_DATE: &str = "ClearDate";
    pub const LOAN_BALANCE_AMT: &str = "LoanBalanceAmt";

    pub const VEHICLE_LOCATION_INFO: &str = "VehicleLocationInfo";
    pub const IS_VEHICLE_AT_CUSTOMER_SITE: &str = "IsVehicleAtCustomerSite";
    pub const LOCATION_NAME: &str = "LocationName";

    pub const CUSTOMER_INFO: &str = "CustomerInfo";
    pub const FULL_NAME: &str = "FullName";
}

/// Value of `IsVehicleAtCustomerSite` for every assignment
pub const VEHICLE_AT_CUSTOMER_SITE: &str = "N";

/// Indentation character and width of the written document
pub const XML_INDENT_CHAR: u8 = b' ';
pub const XML_INDENT_SIZE: usize = 2;
