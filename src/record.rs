// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The product record and its positional construction from tokenized rows.
//!
//! Field mapping is strictly positional: the shop export always emits the
//! same 19 columns in the same order, and the header row is informational
//! only. Column constants below are the single source of truth for that
//! layout; `Catalog::verify_header` checks the export still agrees with it
//! when strict mode is on.
//!
//! # Invariants
//!
//! - A row shorter than [`MIN_FIELDS`] never becomes a record. The caller
//!   skips it and keeps going; short rows are counted, not raised.
//! - Numeric fields that fail to parse coerce to 0. A malformed price must
//!   not sink the whole record.
//! - Positions past the row's end (a 15..18-field row) read as empty.

use serde::{Deserialize, Serialize};

/// Minimum tokenized length for a row to be built into a record.
pub const MIN_FIELDS: usize = 15;

/// The full column layout of the catalog export, in ordinal order.
/// Position in this array == column index in the file.
pub const COLUMNS: [&str; 19] = [
    "product_id",
    "sku",
    "vendor_code",
    "name",
    "url",
    "description",
    "description1",
    "option1_name",
    "option1_value",
    "option2_name",
    "option2_value",
    "price",
    "quantity",
    "price_with_discount",
    "visible",
    "category",
    "subcategory",
    "full_url",
    "img_url",
];

/// One row of the catalog, immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_id: String,
    pub sku: String,
    pub vendor_code: String,
    pub name: String,
    pub url: String,
    /// May contain markup; stripped only in the public-facing projection.
    pub description: String,
    pub description1: String,
    pub option1_name: String,
    pub option1_value: String,
    pub option2_name: String,
    pub option2_value: String,
    pub price: f64,
    pub quantity: u64,
    pub price_with_discount: f64,
    /// Only the literal value "y" marks a record as searchable.
    pub visible: String,
    pub category: String,
    pub subcategory: String,
    pub full_url: String,
    pub img_url: String,
}

impl ProductRecord {
    /// Build a record from a tokenized row, mapping fields by ordinal
    /// position. Returns `None` for rows below [`MIN_FIELDS`].
    pub fn from_fields(fields: &[String]) -> Option<ProductRecord> {
        if fields.len() < MIN_FIELDS {
            return None;
        }

        Some(ProductRecord {
            product_id: text_at(fields, 0),
            sku: text_at(fields, 1),
            vendor_code: text_at(fields, 2),
            name: text_at(fields, 3),
            url: text_at(fields, 4),
            description: text_at(fields, 5),
            description1: text_at(fields, 6),
            option1_name: text_at(fields, 7),
            option1_value: text_at(fields, 8),
            option2_name: text_at(fields, 9),
            option2_value: text_at(fields, 10),
            price: decimal_at(fields, 11),
            quantity: integer_at(fields, 12),
            price_with_discount: decimal_at(fields, 13),
            visible: text_at(fields, 14),
            category: text_at(fields, 15),
            subcategory: text_at(fields, 16),
            full_url: text_at(fields, 17),
            img_url: text_at(fields, 18),
        })
    }

    /// Whether this record may appear in search results at all.
    pub fn is_searchable(&self) -> bool {
        self.visible == "y"
    }

    /// Price used for range filtering: the discounted price when one is
    /// set (> 0), the base price otherwise.
    pub fn effective_price(&self) -> f64 {
        if self.price_with_discount > 0.0 {
            self.price_with_discount
        } else {
            self.price
        }
    }
}

/// Read a text field, stripping any quote characters the tokenizer's
/// restricted grammar let through. Missing positions read as empty.
fn text_at(fields: &[String], index: usize) -> String {
    fields
        .get(index)
        .map(|f| f.replace('"', ""))
        .unwrap_or_default()
}

/// Read a decimal field, defaulting to 0 when absent or unparseable.
fn decimal_at(fields: &[String], index: usize) -> f64 {
    let raw = text_at(fields, index);
    raw.parse::<f64>().unwrap_or(0.0)
}

/// Read an integer field, defaulting to 0 when absent or unparseable.
fn integer_at(fields: &[String], index: usize) -> u64 {
    let raw = text_at(fields, index);
    raw.parse::<u64>().unwrap_or(0)
}
