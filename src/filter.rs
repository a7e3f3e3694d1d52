// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The filter pipeline: an ordered sequence of narrowing predicates over
//! the parsed record set, then truncation to the caller's limit.
//!
//! The order is fixed and load-bearing only in one place - visibility runs
//! first, so an invisible record can never leak through any combination of
//! the other filters. No stage re-sorts; results keep catalog order.
//!
//! # Invariants
//!
//! - Every stage narrows the working set, never widens it.
//! - `matched.len() <= limit` after truncation.
//! - `total_matched` counts matches before truncation, so callers can
//!   tell whether more results exist beyond the returned slice.

use serde::{Deserialize, Serialize};

use crate::record::ProductRecord;
use crate::util::{contains_folded, fold};

/// Default result limit when the caller does not supply one.
pub const DEFAULT_LIMIT: usize = 10;

/// Optional query parameters. Absent fields disable their filter; price
/// bounds additionally only apply when greater than 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free-text query, matched case-insensitively as a substring of
    /// name, description, category, or subcategory.
    #[serde(default)]
    pub query: Option<String>,
    /// Category filter, matched against category or subcategory.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub max_price: Option<f64>,
    /// Maximum number of returned records; defaults to [`DEFAULT_LIMIT`].
    #[serde(default)]
    pub limit: Option<usize>,
}

impl SearchParams {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

/// Outcome of running the pipeline: the truncated slice plus the
/// pre-truncation match count.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub matched: Vec<ProductRecord>,
    pub total_matched: usize,
}

/// Apply the fixed filter order to `records` and truncate to the limit.
pub fn apply_filters(records: Vec<ProductRecord>, params: &SearchParams) -> FilterOutcome {
    let mut working: Vec<ProductRecord> =
        records.into_iter().filter(|r| r.is_searchable()).collect();
    log::debug!("after visibility filter: {} records", working.len());

    if let Some(query) = non_empty(&params.query) {
        let needle = fold(query);
        working.retain(|r| {
            contains_folded(&r.name, &needle)
                || contains_folded(&r.description, &needle)
                || contains_folded(&r.category, &needle)
                || contains_folded(&r.subcategory, &needle)
        });
        log::debug!("after query filter {:?}: {} records", needle, working.len());
    }

    if let Some(category) = non_empty(&params.category) {
        let needle = fold(category);
        working.retain(|r| {
            contains_folded(&r.category, &needle) || contains_folded(&r.subcategory, &needle)
        });
        log::debug!(
            "after category filter {:?}: {} records",
            needle,
            working.len()
        );
    }

    if let Some(min_price) = params.min_price.filter(|p| *p > 0.0) {
        working.retain(|r| r.effective_price() >= min_price);
        log::debug!("after min price {}: {} records", min_price, working.len());
    }

    if let Some(max_price) = params.max_price.filter(|p| *p > 0.0) {
        working.retain(|r| r.effective_price() <= max_price);
        log::debug!("after max price {}: {} records", max_price, working.len());
    }

    let total_matched = working.len();
    working.truncate(params.limit());

    FilterOutcome {
        matched: working,
        total_matched,
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
