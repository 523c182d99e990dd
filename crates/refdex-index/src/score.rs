//! Token and record scoring.
//!
//! A token scores the weight of the strongest tier it satisfies. A record scores the sum of
//! its token scores, but only if every token scored: one silent token disqualifies it.
//! Multi-token queries get the configured bonus multiplier on top.

use serde::Serialize;

use crate::{index::IndexedRecord, search::ScoringParams, tier::Tier};

/// Returns the winning tier for a token against a record, if any.
///
/// An exact code match wins outright. Otherwise every tier is evaluated and the highest
/// weight wins, with earlier tiers winning ties.
pub fn best_tier(record: &IndexedRecord, token: &str, params: &ScoringParams) -> Option<Tier> {
    if Tier::CodeExact.matches(record, token, params) {
        return Some(Tier::CodeExact);
    }

    let mut best: Option<(Tier, u32)> = None;
    for tier in Tier::ALL.into_iter().skip(1) {
        let weight = tier.weight(&params.weights);
        if best.is_some_and(|(_, w)| w >= weight) {
            continue;
        }
        if tier.matches(record, token, params) {
            best = Some((tier, weight));
        }
    }
    best.map(|(tier, _)| tier)
}

/// Scores one token against one record. Zero means no tier matched.
pub fn score_token(record: &IndexedRecord, token: &str, params: &ScoringParams) -> u32 {
    best_tier(record, token, params).map_or(0, |tier| tier.weight(&params.weights))
}

/// Scores a record against all query tokens.
///
/// Returns zero when there are no tokens or when any token scores zero.
pub fn score_record(record: &IndexedRecord, tokens: &[String], params: &ScoringParams) -> f32 {
    if tokens.is_empty() {
        return 0.0;
    }

    let mut sum: u32 = 0;
    for token in tokens {
        let score = score_token(record, token, params);
        if score == 0 {
            return 0.0;
        }
        sum = sum.saturating_add(score);
    }

    apply_bonus(sum, tokens.len(), params)
}

/// Applies the multi-token multiplier to a summed score.
fn apply_bonus(sum: u32, token_count: usize, params: &ScoringParams) -> f32 {
    let sum = sum as f32;
    if token_count > 1 {
        sum * params.multi_token_bonus
    } else {
        sum
    }
}

/// How one token scored against a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenScore {
    /// The normalized token.
    pub token: String,
    /// Winning tier, or `None` if the token disqualified the record.
    pub tier: Option<Tier>,
    /// Weight of the winning tier.
    pub score: u32,
}

/// Per-token breakdown of a record's score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordExplanation {
    /// One entry per query token, in query order.
    pub tokens: Vec<TokenScore>,
    /// Sum of token scores.
    pub sum: u32,
    /// Multiplier applied to the sum (1.0 for single-token queries).
    pub multiplier: f32,
    /// Final score; zero when any token failed to match.
    pub score: f32,
}

impl RecordExplanation {
    /// Returns true if every token matched.
    pub fn is_match(&self) -> bool {
        self.score > 0.0
    }
}

/// Explains how a record scores against the given tokens.
///
/// Unlike [`score_record`] this evaluates every token even after one fails, so the
/// breakdown shows all of them.
pub fn explain_record(
    record: &IndexedRecord,
    tokens: &[String],
    params: &ScoringParams,
) -> RecordExplanation {
    let tokens: Vec<TokenScore> = tokens
        .iter()
        .map(|token| {
            let tier = best_tier(record, token, params);
            TokenScore {
                token: token.clone(),
                tier,
                score: tier.map_or(0, |t| t.weight(&params.weights)),
            }
        })
        .collect();

    let sum = tokens.iter().fold(0u32, |acc, t| acc.saturating_add(t.score));
    let multiplier = if tokens.len() > 1 {
        params.multi_token_bonus
    } else {
        1.0
    };
    let disqualified = tokens.is_empty() || tokens.iter().any(|t| t.score == 0);
    let score = if disqualified {
        0.0
    } else {
        apply_bonus(sum, tokens.len(), params)
    };

    RecordExplanation {
        tokens,
        sum,
        multiplier,
        score,
    }
}
