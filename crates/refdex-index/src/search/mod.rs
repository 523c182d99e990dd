//! Search execution over the catalog index.
//!
//! Provides the [`Searcher`] facade. A search runs in three phases:
//!
//! 1. **Parse**: normalize and tokenize the raw query. An empty token list ends the search
//!    with empty results for every collection.
//!
//! 2. **Score**: score every record of every collection against all tokens. Records that
//!    leave any token unmatched are dropped. See [`crate::score`].
//!
//! 3. **Finalize**: group matches by name prefix, order groups and members by score and
//!    catalog position, then cap each collection. See [`crate::group`].

mod params;
mod types;

pub use params::{DEFAULT_MAX_RESULTS, DEFAULT_MULTI_TOKEN_BONUS, ScoringParams};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use refdex_catalog::load_collection;
use refdex_config::Config;
use refdex_query::Query;
pub use types::{CollectionResults, Explanation, Match, RankedCollection, SearchResults};

use crate::{
    IndexError,
    group::finalize,
    index::{CatalogIndex, CollectionIndex, RecordRef},
    score::{explain_record, score_record},
};

/// Primary search entry point.
///
/// Owns an immutable index, so one searcher can serve any number of queries, and
/// independent searchers never share state.
#[derive(Debug, Clone)]
pub struct Searcher {
    /// Records and derived fields.
    index: CatalogIndex,
    /// Tier weights, thresholds, and result cap.
    params: ScoringParams,
}

impl Searcher {
    /// Creates a searcher over an index.
    pub fn new(index: CatalogIndex, params: ScoringParams) -> Self {
        Self { index, params }
    }

    /// Returns the underlying index.
    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    /// Returns the scoring parameters.
    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    /// Searches every collection with the searcher's parameters.
    pub fn search(&self, raw: &str) -> SearchResults<'_> {
        self.search_with_params(raw, &self.params)
    }

    /// Searches every collection with explicit parameters.
    pub fn search_with_params(&self, raw: &str, params: &ScoringParams) -> SearchResults<'_> {
        let query = Query::parse(raw);
        let collections = self
            .index
            .collections()
            .iter()
            .enumerate()
            .map(|(slot, collection)| {
                let ranked = if query.is_empty() {
                    RankedCollection::default()
                } else {
                    finalize(
                        score_collection(collection, &query.tokens, params),
                        params.max_results,
                    )
                };
                CollectionResults {
                    name: collection.name(),
                    slot,
                    results: ranked.results,
                    total: ranked.total,
                }
            })
            .collect();

        SearchResults { query, collections }
    }

    /// Explains how the record with `code` scores against `raw`.
    ///
    /// Returns `None` if no record has that code.
    pub fn explain(&self, raw: &str, code: &str) -> Option<Explanation<'_>> {
        let found = self.index.lookup(code)?;
        let (_, derived) = self
            .index
            .collections()
            .get(found.slot)?
            .get(found.position)?;
        let query = Query::parse(raw);
        let breakdown = explain_record(derived, &query.tokens, &self.params);

        Some(Explanation {
            query,
            collection: found.collection,
            record: found.record,
            breakdown,
        })
    }

    /// Finds a record by code, ignoring case. The earliest collection wins.
    pub fn lookup(&self, code: &str) -> Option<RecordRef<'_>> {
        self.index.lookup(code)
    }
}

/// Scores every record in a collection, keeping only matches.
#[cfg(feature = "parallel")]
fn score_collection<'a>(
    collection: &'a CollectionIndex,
    tokens: &[String],
    params: &ScoringParams,
) -> Vec<Match<'a>> {
    collection
        .entries()
        .collect::<Vec<_>>()
        .into_par_iter()
        .filter_map(|(position, record, derived)| {
            let score = score_record(derived, tokens, params);
            (score > 0.0).then_some(Match {
                record,
                score,
                position,
            })
        })
        .collect()
}

/// Scores every record in a collection, keeping only matches.
#[cfg(not(feature = "parallel"))]
fn score_collection<'a>(
    collection: &'a CollectionIndex,
    tokens: &[String],
    params: &ScoringParams,
) -> Vec<Match<'a>> {
    collection
        .entries()
        .filter_map(|(position, record, derived)| {
            let score = score_record(derived, tokens, params);
            (score > 0.0).then_some(Match {
                record,
                score,
                position,
            })
        })
        .collect()
}

/// Opens a searcher for a configuration.
///
/// Loads every configured catalog in order and builds the index once. Fails if no
/// catalogs are configured or any catalog file cannot be loaded.
pub fn open_searcher(config: &Config) -> Result<Searcher, IndexError> {
    if config.catalogs.is_empty() {
        return Err(IndexError::NoCatalogs);
    }

    let collections = config
        .catalogs
        .iter()
        .map(|catalog| {
            load_collection(&catalog.name, &catalog.paths).map_err(|source| {
                IndexError::LoadCatalog {
                    name: catalog.name.clone(),
                    source,
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Searcher::new(
        CatalogIndex::build(collections),
        ScoringParams::from_config(config),
    ))
}
