// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the vitrina command-line interface.
//!
//! Two subcommands: `search` runs one query against a catalog export and
//! prints the results (human-readable or the wire JSON), `inspect` parses
//! the catalog and reports what the loader saw - column layout, record
//! and skip counts, category breakdown.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vitrina",
    about = "Product catalog search over quoted CSV shop exports",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog and display matching products
    Search {
        /// Path to the catalog CSV export
        catalog: String,

        /// Free-text query (matched against name, description, category,
        /// subcategory)
        query: Option<String>,

        /// Category filter (matched against category or subcategory)
        #[arg(short, long)]
        category: Option<String>,

        /// Minimum effective price (ignored when 0)
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum effective price (ignored when 0)
        #[arg(long)]
        max_price: Option<f64>,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Emit the wire-format JSON response instead of a listing
        #[arg(long)]
        json: bool,

        /// Fail fast if the catalog header disagrees with the expected
        /// column layout
        #[arg(long)]
        strict_header: bool,
    },

    /// Parse a catalog export and report loader statistics
    Inspect {
        /// Path to the catalog CSV export
        catalog: String,

        /// Fail fast if the catalog header disagrees with the expected
        /// column layout
        #[arg(long)]
        strict_header: bool,
    },
}
