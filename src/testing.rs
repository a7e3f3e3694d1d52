//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::record::{ProductRecord, COLUMNS};

/// Create a visible test record with the fields the filters care about.
pub fn make_record(id: &str, name: &str, category: &str, price: f64) -> ProductRecord {
    ProductRecord {
        product_id: id.to_string(),
        sku: format!("SKU-{}", id),
        vendor_code: String::new(),
        name: name.to_string(),
        url: format!("/product/{}", id),
        description: format!("Description for {}", name),
        description1: String::new(),
        option1_name: String::new(),
        option1_value: String::new(),
        option2_name: String::new(),
        option2_value: String::new(),
        price,
        quantity: 1,
        price_with_discount: 0.0,
        visible: "y".to_string(),
        category: category.to_string(),
        subcategory: String::new(),
        full_url: format!("https://shop.example/product/{}", id),
        img_url: format!("https://shop.example/img/{}.jpg", id),
    }
}

/// Render one catalog CSV data line for a record, quoting the free-text
/// columns the way the shop export does.
pub fn csv_line(record: &ProductRecord) -> String {
    format!(
        "{},{},{},\"{}\",{},\"{}\",{},{},{},{},{},{},{},{},{},\"{}\",\"{}\",{},{}",
        record.product_id,
        record.sku,
        record.vendor_code,
        record.name,
        record.url,
        record.description,
        record.description1,
        record.option1_name,
        record.option1_value,
        record.option2_name,
        record.option2_value,
        record.price,
        record.quantity,
        record.price_with_discount,
        record.visible,
        record.category,
        record.subcategory,
        record.full_url,
        record.img_url,
    )
}

/// Build a full catalog text (expected header + one line per record).
pub fn catalog_text(records: &[ProductRecord]) -> String {
    let mut out = COLUMNS.join(",");
    out.push('\n');
    for record in records {
        out.push_str(&csv_line(record));
        out.push('\n');
    }
    out
}
