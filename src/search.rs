// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query facade: one call = one full read-parse-filter cycle.
//!
//! The engine holds no parsed state between calls. Every `search` re-reads
//! the catalog file, rebuilds the record set, and runs the pipeline, so
//! concurrent callers are trivially safe and an edited catalog file is
//! picked up on the next query. Loader errors propagate unchanged; there
//! is no retry and no fallback catalog.

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::filter::{apply_filters, SearchParams};
use crate::record::ProductRecord;

/// Result of one search call.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Matching records, catalog order, truncated to the limit.
    pub results: Vec<ProductRecord>,
    /// Matches before truncation. When this exceeds `results.len()`,
    /// more results exist beyond the returned slice.
    pub total_matched: usize,
}

/// Stateless search engine over a catalog file.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    catalog_path: PathBuf,
    strict_header: bool,
}

impl SearchEngine {
    pub fn new(catalog_path: impl Into<PathBuf>) -> SearchEngine {
        SearchEngine {
            catalog_path: catalog_path.into(),
            strict_header: false,
        }
    }

    /// Enable header verification: loads fail with `SchemaMismatch` when
    /// the catalog's header disagrees with the expected column layout.
    /// Off by default; the header is informational in the shop export.
    pub fn with_strict_header(mut self, strict: bool) -> SearchEngine {
        self.strict_header = strict;
        self
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    /// Load and parse the catalog, applying the strict-header check when
    /// enabled.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let catalog = Catalog::load(&self.catalog_path)?;
        if self.strict_header {
            catalog.verify_header()?;
        }
        Ok(catalog)
    }

    /// Run one query: full reparse of the catalog, then the filter
    /// pipeline. Identical parameters against an unchanged catalog yield
    /// identical ordered results.
    pub fn search(&self, params: &SearchParams) -> Result<SearchOutcome> {
        log::info!(
            "searching catalog {}: query={:?} category={:?} price=[{:?}, {:?}] limit={}",
            self.catalog_path.display(),
            params.query,
            params.category,
            params.min_price,
            params.max_price,
            params.limit(),
        );

        let catalog = self.load_catalog()?;
        let outcome = apply_filters(catalog.records, params);

        log::info!(
            "search complete: {} returned, {} matched",
            outcome.matched.len(),
            outcome.total_matched,
        );

        Ok(SearchOutcome {
            results: outcome.matched,
            total_matched: outcome.total_matched,
        })
    }
}
