//! Integration tests for refdex-index.
//!
//! Exercises the full path from `.refdex.toml` through catalog loading to ranked results.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::PathBuf};

use refdex_config::Config;
use refdex_index::{IndexError, open_searcher};

/// Absolute path of a fixture catalog.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Writes a root config listing the fixture catalogs and loads it.
fn fixture_config(extra: &str) -> (tempfile::TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    let config = format!(
        r#"root = true

[[catalog]]
name = "billing"
path = "{}"

[[catalog]]
name = "diagnostic"
path = "{}"

{extra}
"#,
        fixture("billing.json").display(),
        fixture("diagnostic.json").display(),
    );
    fs::write(dir.path().join(".refdex.toml"), config).unwrap();
    let loaded = Config::load(dir.path()).unwrap();
    (dir, loaded)
}

#[test]
fn test_open_searcher_loads_catalogs_in_order() {
    let (_dir, config) = fixture_config("");
    let searcher = open_searcher(&config).unwrap();

    let names: Vec<&str> = searcher
        .index()
        .collections()
        .iter()
        .map(|c| c.name())
        .collect();
    assert_eq!(names, vec!["billing", "diagnostic"]);
    assert_eq!(searcher.index().record_count(), 37);
}

#[test]
fn test_search_returns_both_collections() {
    let (_dir, config) = fixture_config("");
    let searcher = open_searcher(&config).unwrap();

    let results = searcher.search("fx");
    let billing = results.collection("billing").unwrap();
    let diagnostic = results.collection("diagnostic").unwrap();

    assert_eq!(billing.results[0].record.code, "G538");
    assert_eq!(diagnostic.results[0].record.code, "813");
}

#[test]
fn test_config_controls_result_cap() {
    let (_dir, config) = fixture_config("[search]\nmax_results = 3\n");
    let searcher = open_searcher(&config).unwrap();

    let results = searcher.search("assessment");
    let billing = results.collection("billing").unwrap();
    assert_eq!(billing.results.len(), 3);
    assert_eq!(billing.total, 16);
}

#[test]
fn test_config_can_disable_fuzzy() {
    let (_dir, config) = fixture_config("[search]\nmax_edit_distance = 0\n");
    let searcher = open_searcher(&config).unwrap();

    assert_eq!(searcher.search("colees").total_matches(), 0);
}

#[test]
fn test_missing_catalog_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".refdex.toml"),
        "root = true\n[[catalog]]\nname = \"billing\"\npath = \"absent.json\"\n",
    )
    .unwrap();
    let config = Config::load(dir.path()).unwrap();

    let err = open_searcher(&config).unwrap_err();
    assert!(matches!(err, IndexError::LoadCatalog { ref name, .. } if name == "billing"));
}

#[test]
fn test_no_catalogs_is_error() {
    let err = open_searcher(&Config::default()).unwrap_err();
    assert!(matches!(err, IndexError::NoCatalogs));
}
