//! Data structures returned by search.

use refdex_catalog::Record;
use refdex_query::Query;
use serde::Serialize;

#[cfg(doc)]
use crate::CatalogIndex;
use crate::{group::group_key, score::RecordExplanation};

/// A record that matched every query token.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Match<'a> {
    /// The matched record.
    pub record: &'a Record,
    /// Aggregate score, bonus included.
    pub score: f32,
    /// Position of the record in its collection; breaks score ties.
    pub position: usize,
}

impl<'a> Match<'a> {
    /// Returns the display group this match belongs to.
    pub fn group_key(&self) -> &'a str {
        group_key(&self.record.name)
    }
}

/// Grouped, sorted, and capped matches for one collection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RankedCollection<'a> {
    /// Matches in display order, at most the result cap.
    pub results: Vec<Match<'a>>,
    /// Number of matches before the cap was applied.
    pub total: usize,
}

/// Search results for one collection.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionResults<'a> {
    /// Collection name.
    pub name: &'a str,
    /// Slot of the collection in [`CatalogIndex::collections`].
    #[serde(skip)]
    pub slot: usize,
    /// Matches in display order, at most the result cap.
    pub results: Vec<Match<'a>>,
    /// Number of matches before the cap was applied.
    pub total: usize,
}

impl CollectionResults<'_> {
    /// Returns true if more records matched than are shown.
    pub fn is_truncated(&self) -> bool {
        self.total > self.results.len()
    }
}

/// Results of one search across every collection.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<'a> {
    /// The parsed query.
    pub query: Query,
    /// One entry per collection, in configured order.
    pub collections: Vec<CollectionResults<'a>>,
}

impl<'a> SearchResults<'a> {
    /// Returns the results for a collection by name.
    pub fn collection(&self, name: &str) -> Option<&CollectionResults<'a>> {
        self.collections.iter().find(|c| c.name == name)
    }

    /// Total matches across all collections, ignoring the cap.
    pub fn total_matches(&self) -> usize {
        self.collections.iter().map(|c| c.total).sum()
    }
}

/// How one record scores against a query.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation<'a> {
    /// The parsed query.
    pub query: Query,
    /// Collection holding the record.
    pub collection: &'a str,
    /// The explained record.
    pub record: &'a Record,
    /// Per-token breakdown.
    pub breakdown: RecordExplanation,
}
