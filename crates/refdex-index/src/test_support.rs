//! Fixture catalogs shared by unit tests.

use std::path::Path;

use refdex_catalog::{Collection, Record, parse_records};

use crate::{CatalogIndex, ScoringParams, Searcher};

/// Billing fixture: emergency assessments by time period, premiums, and procedures.
const BILLING_JSON: &str = include_str!("../tests/fixtures/billing.json");

/// Diagnostic fixture: numeric codes with curated aliases.
const DIAGNOSTIC_JSON: &str = include_str!("../tests/fixtures/diagnostic.json");

/// Parses an embedded fixture.
fn fixture_records(json: &str, name: &str) -> Vec<Record> {
    parse_records(json, Path::new(name)).unwrap()
}

/// Returns the billing and diagnostic fixture collections, in that order.
pub fn fixture_collections() -> Vec<Collection> {
    vec![
        Collection::new("billing", fixture_records(BILLING_JSON, "billing.json")),
        Collection::new(
            "diagnostic",
            fixture_records(DIAGNOSTIC_JSON, "diagnostic.json"),
        ),
    ]
}

/// Returns a searcher over the fixture catalog with default parameters.
pub fn fixture_searcher() -> Searcher {
    Searcher::new(
        CatalogIndex::build(fixture_collections()),
        ScoringParams::default(),
    )
}

/// Returns the codes of one collection's results, in display order.
pub fn result_codes(searcher: &Searcher, query: &str, collection: &str) -> Vec<String> {
    searcher
        .search(query)
        .collection(collection)
        .map(|c| c.results.iter().map(|m| m.record.code.clone()).collect())
        .unwrap_or_default()
}
