//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;
use vitrina::ProductRecord;

// Re-export canonical test utilities from vitrina::testing
pub use vitrina::testing::{catalog_text, csv_line, make_record};

/// Write a catalog (expected header + records) to a temp file. The file
/// is removed when the returned handle drops.
pub fn write_catalog(records: &[ProductRecord]) -> NamedTempFile {
    write_catalog_text(&catalog_text(records))
}

/// Write raw catalog text to a temp file.
pub fn write_catalog_text(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp catalog");
    file.write_all(text.as_bytes()).expect("write temp catalog");
    file
}

/// The fixture from the end-to-end scenarios: three visible records
/// priced 100/200/300 plus one invisible record priced 50.
pub fn priced_fixture() -> Vec<ProductRecord> {
    let mut records = vec![
        make_record("1", "Aviator", "Солнцезащитные", 100.0),
        make_record("2", "Wayfarer", "Солнцезащитные", 200.0),
        make_record("3", "Clubmaster", "Солнцезащитные", 300.0),
    ];
    let mut hidden = make_record("4", "Prototype", "Солнцезащитные", 50.0);
    hidden.visible = "n".to_string();
    records.push(hidden);
    records
}
