//! Parameter types for scoring and ranking.

pub use refdex_config::{DEFAULT_MAX_RESULTS, DEFAULT_MULTI_TOKEN_BONUS};
use refdex_config::{Config, SearchSettings, TierWeights};

/// Parameters controlling tier thresholds, weights, and result capping.
///
/// Defaults reproduce the stock ranking: code prefix from 2 characters, substring matches
/// from 3, typo tolerance of one edit from 4, and 50 results per collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringParams {
    /// Score awarded by each tier.
    pub weights: TierWeights,
    /// Shortest token that may match a code prefix.
    pub min_prefix_length: usize,
    /// Shortest token that may match inside alias terms or display text.
    pub min_substring_length: usize,
    /// Shortest token eligible for fuzzy matching.
    pub min_fuzzy_length: usize,
    /// Largest accepted edit distance for fuzzy matching (0 disables it).
    pub max_edit_distance: usize,
    /// Multiplier for the summed scores of multi-token queries.
    pub multi_token_bonus: f32,
    /// Maximum results kept per collection.
    pub max_results: usize,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self::from_settings(&SearchSettings::default(), TierWeights::default())
    }
}

impl ScoringParams {
    /// Builds parameters from the merged configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::from_settings(&config.search, config.weights.clone())
    }

    /// Builds parameters from search settings and tier weights.
    pub fn from_settings(search: &SearchSettings, weights: TierWeights) -> Self {
        Self {
            weights,
            min_prefix_length: search.min_prefix_length,
            min_substring_length: search.min_substring_length,
            min_fuzzy_length: search.min_fuzzy_length,
            max_edit_distance: search.max_edit_distance,
            multi_token_bonus: search.multi_token_bonus,
            max_results: search.max_results,
        }
    }

    /// Sets the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Sets the tier weights.
    pub fn with_weights(mut self, weights: TierWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the fuzzy edit distance limit.
    pub fn with_max_edit_distance(mut self, max_edit_distance: usize) -> Self {
        self.max_edit_distance = max_edit_distance;
        self
    }
}
