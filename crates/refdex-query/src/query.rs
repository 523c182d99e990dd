//! The transient query value.

use std::fmt;

use serde::Serialize;

use crate::{normalize, tokenize};

/// A user query after normalization and tokenization.
///
/// Queries are created per search call and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    /// The input exactly as typed.
    pub raw: String,
    /// The normalized form of `raw`.
    pub normalized: String,
    /// Tokens of `normalized`, in order.
    pub tokens: Vec<String>,
}

impl Query {
    /// Normalizes and tokenizes a raw query string.
    pub fn parse(raw: &str) -> Self {
        let normalized = normalize(raw);
        let tokens = tokenize(&normalized);
        Self {
            raw: raw.to_string(),
            normalized,
            tokens,
        }
    }

    /// Returns true if the query produced no tokens.
    ///
    /// An empty query matches no record.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the number of tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the query has more than one token.
    pub fn is_multi_token(&self) -> bool {
        self.tokens.len() > 1
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted: Vec<String> = self.tokens.iter().map(|t| format!("\"{t}\"")).collect();
        write!(f, "[{}]", quoted.join(", "))
    }
}
