// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Public-facing projection of search results.
//!
//! Consumers of the query operation (the chat/tool layer) get a trimmed
//! subset of the record fields, with the description stripped of markup
//! and truncated for display. The full [`ProductRecord`] stays internal.

use serde::{Deserialize, Serialize};

use crate::record::ProductRecord;
use crate::search::SearchOutcome;
use crate::util::{strip_html, truncate_chars};

/// Display length for stripped descriptions, in characters.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 200;

/// The field subset exposed to external callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub price_with_discount: f64,
    pub category: String,
    pub subcategory: String,
    /// HTML-stripped, truncated to [`DESCRIPTION_PREVIEW_CHARS`].
    pub description: String,
    pub quantity: u64,
    pub img_url: String,
    pub full_url: String,
}

impl From<&ProductRecord> for ProductSummary {
    fn from(record: &ProductRecord) -> ProductSummary {
        ProductSummary {
            product_id: record.product_id.clone(),
            name: record.name.clone(),
            price: record.price,
            price_with_discount: record.price_with_discount,
            category: record.category.clone(),
            subcategory: record.subcategory.clone(),
            description: truncate_chars(
                &strip_html(&record.description),
                DESCRIPTION_PREVIEW_CHARS,
            ),
            quantity: record.quantity,
            img_url: record.img_url.clone(),
            full_url: record.full_url.clone(),
        }
    }
}

/// Wire shape of the query operation's output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub products: Vec<ProductSummary>,
    /// Matches before truncation, so callers can tell whether more
    /// results exist than `products` carries.
    pub total_found: usize,
}

impl From<&SearchOutcome> for SearchResponse {
    fn from(outcome: &SearchOutcome) -> SearchResponse {
        SearchResponse {
            products: outcome.results.iter().map(ProductSummary::from).collect(),
            total_found: outcome.total_matched,
        }
    }
}
