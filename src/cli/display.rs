// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for search results and catalog statistics.

use std::collections::BTreeMap;

use vitrina::{Catalog, ProductSummary, SearchOutcome, SearchResponse};

/// Print a human-readable result listing.
pub fn print_results(outcome: &SearchOutcome) {
    if outcome.results.is_empty() {
        println!("No products matched.");
        return;
    }

    for (i, record) in outcome.results.iter().enumerate() {
        let summary = ProductSummary::from(record);
        println!("{}. {}", i + 1, summary.name);
        if !summary.category.is_empty() {
            let path = if summary.subcategory.is_empty() {
                summary.category.clone()
            } else {
                format!("{} / {}", summary.category, summary.subcategory)
            };
            println!("   {}", path);
        }
        println!("   {}", format_price(&summary));
        if !summary.description.is_empty() {
            println!("   {}", summary.description);
        }
        if !summary.full_url.is_empty() {
            println!("   {}", summary.full_url);
        }
        println!();
    }

    if outcome.total_matched > outcome.results.len() {
        println!(
            "Showing {} of {} matches.",
            outcome.results.len(),
            outcome.total_matched
        );
    } else {
        println!("{} match(es).", outcome.total_matched);
    }
}

/// Print the wire-format JSON response.
pub fn print_json(outcome: &SearchOutcome) {
    let response = SearchResponse::from(outcome);
    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("failed to serialize response: {}", e),
    }
}

/// Print loader statistics for `inspect`.
pub fn print_inspection(catalog: &Catalog) {
    println!("Header columns: {}", catalog.header.len());
    for (i, column) in catalog.header.iter().enumerate() {
        println!("  [{:>2}] {}", i, column);
    }

    let visible = catalog.records.iter().filter(|r| r.is_searchable()).count();
    println!();
    println!("Records parsed:  {}", catalog.records.len());
    println!("Lines skipped:   {}", catalog.skipped);
    println!("Searchable:      {}", visible);

    let mut categories: BTreeMap<&str, usize> = BTreeMap::new();
    for record in &catalog.records {
        if !record.category.is_empty() {
            *categories.entry(record.category.as_str()).or_default() += 1;
        }
    }
    if !categories.is_empty() {
        println!();
        println!("Categories:");
        for (category, count) in categories {
            println!("  {:<30} {}", category, count);
        }
    }
}

fn format_price(summary: &ProductSummary) -> String {
    if summary.price_with_discount > 0.0 {
        format!(
            "{} (was {})",
            summary.price_with_discount, summary.price
        )
    } else {
        summary.price.to_string()
    }
}
