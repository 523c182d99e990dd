//! Catalog records and JSON catalog loading for refdex.
//!
//! A catalog is an ordered list of short reference records (billing codes, diagnostic
//! codes, ...) kept in a JSON array. This crate handles:
//! - The [`Record`] type with lenient decoding of spreadsheet-exported fields
//! - Loading one or more catalog files into a named [`Collection`]
//!
//! Records are immutable once loaded. The search engine derives its own lookup fields
//! from them and never writes back.

#![warn(missing_docs)]

mod error;
mod lenient;
mod load;

pub use error::CatalogError;
pub use load::{load_collection, load_records, parse_records};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One catalog entry.
///
/// Decoding never fails: see [`Record::from_value`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    /// Short identifier, unique within its collection.
    pub code: String,
    /// Human-readable description.
    pub name: String,
    /// Optional grouping label, prepended to the name for matching only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Curated synonyms and abbreviations.
    #[serde(rename = "search_terms")]
    pub alias_terms: Vec<String>,
    /// All other fields of the source object, kept verbatim for display.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

impl Record {
    /// Creates a record with a code and name.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the subcategory.
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        let subcategory = subcategory.into();
        self.subcategory = (!subcategory.is_empty()).then_some(subcategory);
        self
    }

    /// Sets the alias terms.
    pub fn with_alias_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alias_terms = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Decodes a record from a JSON value.
    ///
    /// Fields are decoded one at a time, so an unusable field falls back to its default
    /// without affecting the others. Aliases are read from `search_terms`, `alias_terms`
    /// or `aliases`, whichever comes first in that order; every other key lands in
    /// `extra`. Anything that is not a JSON object yields an empty record.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            return Self::default();
        };

        Self {
            code: lenient::take_text(&mut fields, "code"),
            name: lenient::take_text(&mut fields, "name"),
            subcategory: lenient::take_optional_text(&mut fields, "subcategory"),
            alias_terms: lenient::take_terms(&mut fields),
            extra: fields,
        }
    }

    /// Text used for name matching: `subcategory + " " + name` when a subcategory is set.
    pub fn display_text(&self) -> String {
        match &self.subcategory {
            Some(subcategory) => format!("{subcategory} {}", self.name),
            None => self.name.clone(),
        }
    }
}

/// A named, ordered set of records searched as one unit.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    /// Collection name (e.g. "billing").
    pub name: String,
    /// Records in curator order.
    pub records: Vec<Record>,
}

impl Collection {
    /// Creates a collection from records.
    pub fn new(name: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the collection has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
