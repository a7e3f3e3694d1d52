//! Full search scenarios against temp catalog files.

use vitrina::{
    CatalogError, SearchEngine, SearchParams, SearchResponse, COLUMNS,
};

use crate::common::{make_record, priced_fixture, write_catalog, write_catalog_text};

#[test]
fn test_min_price_scenario() {
    // Three visible records priced 100/200/300 plus an invisible one at 50.
    let file = write_catalog(&priced_fixture());
    let engine = SearchEngine::new(file.path());

    let outcome = engine
        .search(&SearchParams {
            min_price: Some(150.0),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(outcome.total_matched, 2);
    let prices: Vec<f64> = outcome.results.iter().map(|r| r.price).collect();
    assert_eq!(prices, vec![200.0, 300.0]);
}

#[test]
fn test_invisible_record_never_returned() {
    let file = write_catalog(&priced_fixture());
    let engine = SearchEngine::new(file.path());

    // A price window only the invisible record (50) falls into.
    let outcome = engine
        .search(&SearchParams {
            max_price: Some(60.0),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(outcome.total_matched, 0);

    // And with no filters at all it still stays hidden.
    let outcome = engine.search(&SearchParams::default()).unwrap();
    assert!(outcome.results.iter().all(|r| r.visible == "y"));
    assert_eq!(outcome.total_matched, 3);
}

#[test]
fn test_cyrillic_query_matches_category() {
    let file = write_catalog(&priced_fixture());
    let engine = SearchEngine::new(file.path());

    let outcome = engine
        .search(&SearchParams {
            query: Some("СОЛНЦЕ".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(outcome.total_matched, 3);
}

#[test]
fn test_query_matches_description() {
    let mut record = make_record("1", "Модель X", "Оправы", 100.0);
    record.description = "Classic aviator silhouette with UV400 lenses".to_string();
    let file = write_catalog(&[record]);
    let engine = SearchEngine::new(file.path());

    let outcome = engine
        .search(&SearchParams {
            query: Some("aviator".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(outcome.total_matched, 1);
}

#[test]
fn test_identical_calls_identical_results() {
    let file = write_catalog(&priced_fixture());
    let engine = SearchEngine::new(file.path());
    let params = SearchParams {
        query: Some("a".to_string()),
        limit: Some(2),
        ..Default::default()
    };

    let first = engine.search(&params).unwrap();
    let second = engine.search(&params).unwrap();
    assert_eq!(first.results, second.results);
    assert_eq!(first.total_matched, second.total_matched);
}

#[test]
fn test_missing_file_is_source_unavailable() {
    let engine = SearchEngine::new("/nonexistent/products.csv");
    let err = engine.search(&SearchParams::default()).unwrap_err();
    assert!(matches!(err, CatalogError::SourceUnavailable { .. }));
}

#[test]
fn test_malformed_lines_skipped_not_fatal() {
    let mut text = format!("{}\n", COLUMNS.join(","));
    text.push_str("short,line\n");
    text.push_str(&vitrina::testing::csv_line(&make_record(
        "1", "Aviator", "Очки", 100.0,
    )));
    text.push('\n');
    let file = write_catalog_text(&text);

    let outcome = SearchEngine::new(file.path())
        .search(&SearchParams::default())
        .unwrap();
    assert_eq!(outcome.total_matched, 1);
}

#[test]
fn test_strict_header_rejects_reordered_export() {
    let mut columns: Vec<&str> = COLUMNS.to_vec();
    columns.swap(3, 15); // name <-> category
    let text = format!("{}\n", columns.join(","));
    let file = write_catalog_text(&text);

    let err = SearchEngine::new(file.path())
        .with_strict_header(true)
        .search(&SearchParams::default())
        .unwrap_err();
    assert!(matches!(err, CatalogError::SchemaMismatch { position: 3, .. }));
}

#[test]
fn test_lenient_mode_ignores_header() {
    // Default mode never consults header names; a nonsense header still
    // yields records mapped positionally.
    let mut text = "completely,bogus,header\n".to_string();
    text.push_str(&vitrina::testing::csv_line(&make_record(
        "1", "Aviator", "Очки", 100.0,
    )));
    text.push('\n');
    let file = write_catalog_text(&text);

    let outcome = SearchEngine::new(file.path())
        .search(&SearchParams::default())
        .unwrap();
    assert_eq!(outcome.total_matched, 1);
    assert_eq!(outcome.results[0].name, "Aviator");
}

#[test]
fn test_wire_response_shape() {
    let mut records = Vec::new();
    for i in 0..5 {
        let mut r = make_record(&i.to_string(), "Aviator", "Очки", 100.0);
        r.description = format!("<p>{}</p>", "о".repeat(250));
        records.push(r);
    }
    let file = write_catalog(&records);

    let outcome = SearchEngine::new(file.path())
        .search(&SearchParams {
            limit: Some(2),
            ..Default::default()
        })
        .unwrap();
    let response = SearchResponse::from(&outcome);

    assert_eq!(response.products.len(), 2);
    assert_eq!(response.total_found, 5);
    for product in &response.products {
        assert!(!product.description.contains('<'));
        assert!(product.description.chars().count() <= 203);
    }

    // The wire shape serializes with the agreed field names.
    let json = serde_json::to_value(&response).unwrap();
    assert!(json.get("products").is_some());
    assert!(json.get("total_found").is_some());
    assert!(json["products"][0].get("img_url").is_some());
}
