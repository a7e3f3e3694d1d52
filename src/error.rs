// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for catalog loading.
//!
//! Only two things are fatal to a query: the catalog file being unreadable,
//! and (in strict mode) the header not matching the expected schema.
//! Everything else - short rows, unparseable prices - is recovered locally
//! during parsing and never surfaces as an error.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read at all. Fatal for the query;
    /// no partial or cached catalog is substituted.
    #[error("catalog source unavailable: {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Strict mode only: a header column disagrees with the expected
    /// 19-column schema. Caught at load time, before any row is mapped
    /// positionally, so a reordered export fails fast instead of
    /// silently producing garbage records.
    #[error("catalog schema mismatch at column {position}: expected {expected:?}, found {found:?}")]
    SchemaMismatch {
        position: usize,
        expected: String,
        found: String,
    },
}
