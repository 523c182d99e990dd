//! Forgiving field decoders for catalog records.
//!
//! Catalog files are produced by spreadsheet converters, so a field can be missing, `null`,
//! or carry a number where text was expected (diagnostic code `813`). Each field is decoded
//! on its own and none of these reject the record: text falls back to an empty string and
//! scalars are stringified.

use serde_json::{Map, Value};

/// Delimiter used when alias terms arrive as a single string.
const TERM_DELIMITER: char = ';';

/// Keys accepted for alias terms, in preference order.
pub const ALIAS_KEYS: [&str; 3] = ["search_terms", "alias_terms", "aliases"];

/// Renders a scalar JSON value as text. Arrays, objects and `null` become empty.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Removes `key` from `fields` and decodes it as text, substituting `""` for anything unusable.
pub fn take_text(fields: &mut Map<String, Value>, key: &str) -> String {
    fields
        .remove(key)
        .as_ref()
        .map(scalar_text)
        .unwrap_or_default()
}

/// Removes `key` from `fields` and decodes it as optional text. Empty text counts as absent.
pub fn take_optional_text(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    let text = take_text(fields, key);
    (!text.is_empty()).then_some(text)
}

/// Removes the first present alias key and decodes its terms.
///
/// Terms may be an array or a `;`-delimited string; empty entries are dropped. Alias keys
/// after the first present one stay in `fields`.
pub fn take_terms(fields: &mut Map<String, Value>) -> Vec<String> {
    let Some(value) = ALIAS_KEYS.iter().find_map(|key| fields.remove(*key)) else {
        return Vec::new();
    };

    match value {
        Value::Array(items) => items
            .iter()
            .map(scalar_text)
            .filter(|t| !t.trim().is_empty())
            .collect(),
        Value::String(joined) => joined
            .split(TERM_DELIMITER)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
