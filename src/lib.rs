//! Product catalog search over quoted CSV shop exports.
//!
//! This crate parses an untyped, quoted CSV catalog into typed product
//! records and answers bounded ad-hoc queries against it. Every query is
//! a full read-parse-filter cycle over the source file; there is no index,
//! no cache, and no shared state between calls.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   csv.rs   │────▶│  catalog.rs  │────▶│  record.rs  │
//! │ (tokenize_ │     │  (Catalog::  │     │ (Product-   │
//! │   line)    │     │    load)     │     │   Record)   │
//! └────────────┘     └──────────────┘     └─────────────┘
//!                                               │
//!                    ┌──────────────┐     ┌─────▼───────┐
//!                    │  search.rs   │◀────│  filter.rs  │
//!                    │(SearchEngine)│     │(apply_filters)
//!                    └──────────────┘     └─────────────┘
//! ```
//!
//! `response.rs` projects outcomes into the trimmed wire shape the
//! chat/tool layer consumes.
//!
//! # Usage
//!
//! ```ignore
//! use vitrina::{SearchEngine, SearchParams};
//!
//! let engine = SearchEngine::new("data/products.csv");
//! let outcome = engine.search(&SearchParams {
//!     query: Some("aviator".to_string()),
//!     max_price: Some(5000.0),
//!     ..Default::default()
//! })?;
//! println!("{} of {} matches", outcome.results.len(), outcome.total_matched);
//! ```

// Module declarations
mod catalog;
mod csv;
mod error;
mod filter;
mod record;
mod response;
mod search;
pub mod testing;
mod util;

// Re-exports for public API
pub use catalog::Catalog;
pub use csv::tokenize_line;
pub use error::{CatalogError, Result};
pub use filter::{apply_filters, FilterOutcome, SearchParams, DEFAULT_LIMIT};
pub use record::{ProductRecord, COLUMNS, MIN_FIELDS};
pub use response::{ProductSummary, SearchResponse, DESCRIPTION_PREVIEW_CHARS};
pub use search::{SearchEngine, SearchOutcome};
pub use util::{strip_html, truncate_chars};
