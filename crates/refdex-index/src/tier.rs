//! Matching tiers.
//!
//! Each tier is one rule relating a query token to a record. Tiers are listed strongest
//! first; a token's score is the weight of the best tier it satisfies.

use std::fmt;

use refdex_config::TierWeights;
use serde::Serialize;

use crate::{fuzzy::levenshtein_within, index::IndexedRecord, search::ScoringParams};

/// A scoring rule with a fixed precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Token equals the code.
    CodeExact,
    /// Code starts with the token.
    CodePrefix,
    /// Token equals an alias term.
    AliasExact,
    /// Token equals a display word.
    NameWord,
    /// Token occurs inside an alias term.
    AliasSubstring,
    /// Token occurs inside the display text.
    NameSubstring,
    /// Token is a small number of edits away from an alias or display word.
    Fuzzy,
}

impl Tier {
    /// All tiers in precedence order.
    pub const ALL: [Self; 7] = [
        Self::CodeExact,
        Self::CodePrefix,
        Self::AliasExact,
        Self::NameWord,
        Self::AliasSubstring,
        Self::NameSubstring,
        Self::Fuzzy,
    ];

    /// Returns the configured weight for this tier.
    pub fn weight(self, weights: &TierWeights) -> u32 {
        match self {
            Self::CodeExact => weights.code_exact,
            Self::CodePrefix => weights.code_prefix,
            Self::AliasExact => weights.alias_exact,
            Self::NameWord => weights.name_word,
            Self::AliasSubstring => weights.alias_substring,
            Self::NameSubstring => weights.name_substring,
            Self::Fuzzy => weights.fuzzy,
        }
    }

    /// Returns the configuration key for this tier.
    pub fn key(self) -> &'static str {
        match self {
            Self::CodeExact => "code_exact",
            Self::CodePrefix => "code_prefix",
            Self::AliasExact => "alias_exact",
            Self::NameWord => "name_word",
            Self::AliasSubstring => "alias_substring",
            Self::NameSubstring => "name_substring",
            Self::Fuzzy => "fuzzy",
        }
    }

    /// Returns true if `token` satisfies this tier for `record`.
    ///
    /// `token` must already be normalized.
    pub fn matches(self, record: &IndexedRecord, token: &str, params: &ScoringParams) -> bool {
        let len = token.chars().count();
        match self {
            Self::CodeExact => !record.lower_code.is_empty() && record.lower_code == token,
            Self::CodePrefix => {
                len >= params.min_prefix_length && record.lower_code.starts_with(token)
            }
            Self::AliasExact => record.lower_alias_terms.iter().any(|term| term == token),
            Self::NameWord => record.lower_display_words.iter().any(|word| word == token),
            Self::AliasSubstring => {
                len >= params.min_substring_length
                    && record.lower_alias_terms.iter().any(|term| term.contains(token))
            }
            Self::NameSubstring => {
                len >= params.min_substring_length && record.lower_display_text.contains(token)
            }
            Self::Fuzzy => {
                params.max_edit_distance > 0
                    && len >= params.min_fuzzy_length
                    && fuzzy_candidates(record)
                        .any(|word| is_near_miss(token, word, params.max_edit_distance))
            }
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::CodeExact => "code exact",
            Self::CodePrefix => "code prefix",
            Self::AliasExact => "alias exact",
            Self::NameWord => "name word",
            Self::AliasSubstring => "alias substring",
            Self::NameSubstring => "name substring",
            Self::Fuzzy => "fuzzy",
        };
        f.write_str(label)
    }
}

/// Words a fuzzy token is compared against: alias terms, alias words, and display words.
fn fuzzy_candidates(record: &IndexedRecord) -> impl Iterator<Item = &str> {
    record
        .lower_alias_terms
        .iter()
        .chain(&record.lower_alias_words)
        .chain(&record.lower_display_words)
        .map(String::as_str)
}

/// True when `word` is at least one and at most `max` edits from `token`.
///
/// Distance zero is left to the exact tiers.
fn is_near_miss(token: &str, word: &str, max: usize) -> bool {
    matches!(levenshtein_within(token, word, max), Some(d) if d >= 1)
}
