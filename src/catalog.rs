// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog loading: file → header + tokenized data rows → records.
//!
//! Loading is a full read of the source file on every call. There is no
//! cache and no incremental parse; the catalog is small enough that a
//! reparse per query is cheaper than getting invalidation right.

use std::fs;
use std::path::{Path, PathBuf};

use crate::csv::tokenize_line;
use crate::error::{CatalogError, Result};
use crate::record::{ProductRecord, COLUMNS};

/// A parsed catalog: the header row plus every record that survived
/// row-level validation.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Tokenized header fields, quote-stripped. Informational only;
    /// field mapping is positional.
    pub header: Vec<String>,
    pub records: Vec<ProductRecord>,
    /// Data lines that tokenized to fewer than the minimum field count
    /// and were skipped.
    pub skipped: usize,
}

impl Catalog {
    /// Read and parse the catalog at `path`.
    ///
    /// Fails with [`CatalogError::SourceUnavailable`] if the file cannot
    /// be read; that error is fatal to the whole query. Malformed data
    /// lines are skipped and counted, never raised.
    pub fn load(path: &Path) -> Result<Catalog> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::SourceUnavailable {
            path: PathBuf::from(path),
            source,
        })?;
        log::debug!("loaded catalog source: {} ({} bytes)", path.display(), text.len());
        Ok(Self::parse(&text))
    }

    /// Parse catalog text that has already been read.
    pub fn parse(text: &str) -> Catalog {
        let mut lines = text.lines();
        let header = lines
            .next()
            .map(|line| {
                tokenize_line(line)
                    .into_iter()
                    .map(|field| field.replace('"', ""))
                    .collect()
            })
            .unwrap_or_default();

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match ProductRecord::from_fields(&tokenize_line(line)) {
                Some(record) => records.push(record),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            log::warn!("skipped {} malformed catalog lines", skipped);
        }
        log::debug!("parsed {} catalog records", records.len());

        Catalog { header, records, skipped }
    }

    /// Compare the header against the expected column layout, position by
    /// position (case-insensitive, trimmed). The first disagreement fails
    /// with [`CatalogError::SchemaMismatch`].
    ///
    /// Only the positions the header actually has are checked: exports
    /// that carry trailing extra columns still pass, a reordered or
    /// renamed column does not.
    pub fn verify_header(&self) -> Result<()> {
        for (position, expected) in COLUMNS.iter().enumerate() {
            let Some(found) = self.header.get(position) else {
                break;
            };
            if !found.trim().eq_ignore_ascii_case(expected) {
                return Err(CatalogError::SchemaMismatch {
                    position,
                    expected: expected.to_string(),
                    found: found.trim().to_string(),
                });
            }
        }
        Ok(())
    }
}
