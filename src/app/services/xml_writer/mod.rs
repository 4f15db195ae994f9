//! XML writer for Remarketing documents
//!
//! This module serializes parsed remarketing records into the fixed-schema
//! document consumed downstream:
//!
//! ```text
//! Remarketing
//!   FileInfo: RSAClientID, FileCreateDate, ItemCount
//!   RemarketingAssignmentList
//!     RemarketingAssignment*
//! ```
//!
//! # Architecture
//!
//! - [`config`] - Rendering settings and the write outcome
//! - [`writer`] - Document rendering and atomic file replacement
//! - [`utils`] - Output path computation and directory preparation
//!
//! # Basic Usage
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use rmk_xls_to_xml::{RunMetadata, TracingSink};
//! use rmk_xls_to_xml::app::services::xml_writer::{XmlWriter, utils};
//!
//! # fn example(records: Vec<rmk_xls_to_xml::RemarketingRecord>) -> rmk_xls_to_xml::Result<()> {
//! let writer = XmlWriter::new(Arc::new(TracingSink));
//! let metadata = RunMetadata::for_records("RSA-42", &records);
//! let output_path = utils::create_output_path(Path::new("repos.xlsx"), Path::new("out"))?;
//!
//! let outcome = writer.emit(&records, &metadata, &output_path)?;
//! println!("Wrote {} assignments", outcome.assignments_written);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod utils;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use config::{WriteOutcome, WriterConfig};
pub use writer::XmlWriter;
