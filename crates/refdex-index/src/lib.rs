//! Tiered matching and ranking engine for refdex catalogs.
//!
//! This crate turns loaded catalogs into an immutable [`CatalogIndex`] and ranks its records
//! against free-text queries. It handles:
//! - Precomputing lowercase lookup fields once per record
//! - Scoring each query token against a record by the strongest matching [`Tier`]
//! - Combining token scores with AND semantics and a multi-token bonus
//! - Grouping, ordering, and capping results per collection
//! - Loading configured catalogs into a ready [`Searcher`]
//!
//! # Example
//!
//! ```
//! use refdex_catalog::{Collection, Record};
//! use refdex_index::{CatalogIndex, ScoringParams, Searcher};
//!
//! let billing = Collection::new(
//!     "billing",
//!     vec![
//!         Record::new("H102", "Weekday daytime – comprehensive assessment"),
//!         Record::new("G521", "Laceration repair - simple").with_alias_terms(["lac"]),
//!     ],
//! );
//! let searcher = Searcher::new(CatalogIndex::build(vec![billing]), ScoringParams::default());
//!
//! let results = searcher.search("lac");
//! let billing = results.collection("billing").unwrap();
//! assert_eq!(billing.total, 1);
//! assert_eq!(billing.results[0].record.code, "G521");
//! ```

#![warn(missing_docs)]

mod error;
mod fuzzy;
mod group;
mod index;
mod score;
mod search;
#[cfg(test)]
mod test_support;
mod tier;

pub use error::IndexError;
pub use fuzzy::{levenshtein, levenshtein_within};
pub use group::{finalize, group_key};
pub use index::{CatalogIndex, CollectionIndex, IndexedRecord, RecordRef};
pub use score::{RecordExplanation, TokenScore, best_tier, explain_record, score_record, score_token};
pub use search::{
    CollectionResults, DEFAULT_MAX_RESULTS, DEFAULT_MULTI_TOKEN_BONUS, Explanation, Match,
    RankedCollection, ScoringParams, SearchResults, Searcher, open_searcher,
};
pub use tier::Tier;
