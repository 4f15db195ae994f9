//! Test utilities for XML writer testing

use chrono::{Local, NaiveDate, TimeZone};
use quick_xml::Reader;
use quick_xml::events::Event;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

use super::XmlWriter;
use crate::app::diagnostics::MemorySink;
use crate::app::models::{RemarketingRecord, RunMetadata};


/// Helper to create a record with the fields the document shows most
pub fn create_test_record(account: &str, first_name: &str, last_name: &str) -> RemarketingRecord {
    RemarketingRecord::new(
        account.to_string(),
        format!("LN-{}", account),
        last_name.to_string(),
        first_name.to_string(),
        Decimal::from_str("15250.75").unwrap(),
        "2018".to_string(),
        "Ford".to_string(),
        "F-150".to_string(),
        format!("1FTEW1EP5JFA{}", account),
        48210,
        "Acme Recovery".to_string(),
        "ACME01".to_string(),
        "Dallas Lot 4".to_string(),
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    )
    .unwrap()
}

/// Helper to create metadata with a fixed creation time
pub fn create_test_metadata(records: &[RemarketingRecord]) -> RunMetadata {
    let created_at = Local.with_ymd_and_hms(2024, 3, 9, 14, 30, 0).unwrap();
    RunMetadata::for_records("RSA-42", records).with_created_at(created_at)
}

/// Helper to create a writer that records diagnostics in memory
pub fn create_test_writer() -> (XmlWriter, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    (XmlWriter::new(sink.clone()), sink)
}

/// Every element of a document in opening order, with its unescaped text
pub fn element_texts(xml: &str) -> Vec<(String, String)> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut elements: Vec<(String, String)> = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) | Event::Empty(e) => {
                let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                elements.push((name, String::new()));
            }
            Event::Text(t) => {
                let text = t.unescape().unwrap().into_owned();
                if let Some(last) = elements.last_mut() {
                    last.1 = text;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    elements
}

/// Texts of every element with the given name, in document order
pub fn texts_of(xml: &str, name: &str) -> Vec<String> {
    element_texts(xml)
        .into_iter()
        .filter(|(element, _)| element == name)
        .map(|(_, text)| text)
        .collect()
}
