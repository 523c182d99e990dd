//! The catalog index: records plus their precomputed lowercase lookup fields.
//!
//! Derived fields live in a separate arena, one entry per record, so input records are
//! never touched after loading.

use std::collections::{HashMap, hash_map::Entry};

use refdex_catalog::{Collection, Record};
use serde::Serialize;

/// Lowercased lookup fields derived from one [`Record`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexedRecord {
    /// Lowercased code.
    pub lower_code: String,
    /// Lowercased `subcategory + " " + name` (or just the name).
    pub lower_display_text: String,
    /// Whitespace-separated words of the display text.
    pub lower_display_words: Vec<String>,
    /// Lowercased alias terms.
    pub lower_alias_terms: Vec<String>,
    /// Words of the multi-word alias terms, for typo matching.
    pub lower_alias_words: Vec<String>,
}

impl IndexedRecord {
    /// Computes the derived fields of a record.
    pub fn derive(record: &Record) -> Self {
        let lower_display_text = record.display_text().to_lowercase();
        let lower_display_words = split_words(&lower_display_text);
        let lower_alias_terms: Vec<String> = record
            .alias_terms
            .iter()
            .map(|term| term.trim().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();
        let lower_alias_words = lower_alias_terms
            .iter()
            .filter(|term| term.contains(char::is_whitespace))
            .flat_map(|term| split_words(term))
            .collect();

        Self {
            lower_code: record.code.trim().to_lowercase(),
            lower_display_text,
            lower_display_words,
            lower_alias_terms,
            lower_alias_words,
        }
    }
}

/// Splits text on whitespace into owned words.
fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// One searchable collection: records in catalog order with their derived fields.
#[derive(Debug, Clone, Default)]
pub struct CollectionIndex {
    /// Collection name.
    name: String,
    /// Source records, in catalog order.
    records: Vec<Record>,
    /// Derived fields, parallel to `records`.
    derived: Vec<IndexedRecord>,
}

impl CollectionIndex {
    /// Indexes a collection.
    pub fn build(collection: Collection) -> Self {
        let derived = collection.records.iter().map(IndexedRecord::derive).collect();
        Self {
            name: collection.name,
            records: collection.records,
            derived,
        }
    }

    /// Returns the collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the collection has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records in catalog order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the record and derived fields at a catalog position.
    pub fn get(&self, position: usize) -> Option<(&Record, &IndexedRecord)> {
        Some((self.records.get(position)?, self.derived.get(position)?))
    }

    /// Iterates `(position, record, derived)` in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Record, &IndexedRecord)> {
        self.records
            .iter()
            .zip(&self.derived)
            .enumerate()
            .map(|(position, (record, derived))| (position, record, derived))
    }
}

/// A record located in the index.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RecordRef<'a> {
    /// Name of the collection holding the record.
    pub collection: &'a str,
    /// Slot of the collection in [`CatalogIndex::collections`].
    #[serde(skip)]
    pub slot: usize,
    /// Position of the record within its collection.
    pub position: usize,
    /// The record itself.
    pub record: &'a Record,
}

/// Immutable index over every configured collection.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    /// Collections in configured order.
    collections: Vec<CollectionIndex>,
    /// Lowercased code -> (collection, position); the first collection to claim a code keeps it.
    codes: HashMap<String, (usize, usize)>,
}

impl CatalogIndex {
    /// Builds the index, computing derived fields for every record exactly once.
    pub fn build(collections: Vec<Collection>) -> Self {
        let collections: Vec<CollectionIndex> =
            collections.into_iter().map(CollectionIndex::build).collect();

        let mut codes = HashMap::new();
        for (c, collection) in collections.iter().enumerate() {
            for (position, _, derived) in collection.entries() {
                if derived.lower_code.is_empty() {
                    continue;
                }
                if let Entry::Vacant(slot) = codes.entry(derived.lower_code.clone()) {
                    slot.insert((c, position));
                }
            }
        }

        Self { collections, codes }
    }

    /// Returns an index with no collections. Every search against it is empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the collections in configured order.
    pub fn collections(&self) -> &[CollectionIndex] {
        &self.collections
    }

    /// Looks up a collection by name.
    pub fn collection(&self, name: &str) -> Option<&CollectionIndex> {
        self.collections.iter().find(|c| c.name == name)
    }

    /// Total number of records across all collections.
    pub fn record_count(&self) -> usize {
        self.collections.iter().map(CollectionIndex::len).sum()
    }

    /// Finds a record by code, ignoring case.
    ///
    /// Codes are unique within a collection but may repeat across collections; the
    /// earliest configured collection wins.
    pub fn lookup(&self, code: &str) -> Option<RecordRef<'_>> {
        let key = code.trim().to_lowercase();
        let &(slot, position) = self.codes.get(&key)?;
        let collection = self.collections.get(slot)?;
        let (record, _) = collection.get(position)?;
        Some(RecordRef {
            collection: &collection.name,
            slot,
            position,
            record,
        })
    }
}
