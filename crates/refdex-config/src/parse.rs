//! Configuration file parsing.
//!
//! Parses individual `.refdex.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Search settings section.
    pub search: Option<RawSearchSettings>,
    /// Tier weight section.
    pub weights: Option<RawWeights>,
    /// Catalog definitions, in declaration order.
    pub catalog: Option<Vec<RawCatalog>>,
}

/// Raw catalog definition from a `[[catalog]]` table.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct RawCatalog {
    /// Catalog name.
    pub name: String,
    /// JSON file(s) holding the catalog records.
    /// Accepts either a single string or an array of strings.
    #[serde_as(as = "OneOrMany<_>")]
    pub path: Vec<String>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Result cap per catalog.
    #[serde(alias = "limit")]
    pub max_results: Option<usize>,
    /// Multi-token score multiplier.
    pub multi_token_bonus: Option<f32>,
    /// Minimum token length for code prefix matches.
    pub min_prefix_length: Option<usize>,
    /// Minimum token length for substring matches.
    pub min_substring_length: Option<usize>,
    /// Minimum token length for fuzzy matches.
    pub min_fuzzy_length: Option<usize>,
    /// Fuzzy matching edit distance (0 = disabled).
    pub max_edit_distance: Option<usize>,
}

/// Raw tier weights.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawWeights {
    /// Code exact weight.
    pub code_exact: Option<u32>,
    /// Code prefix weight.
    pub code_prefix: Option<u32>,
    /// Alias exact weight.
    pub alias_exact: Option<u32>,
    /// Display word weight.
    pub name_word: Option<u32>,
    /// Alias substring weight.
    pub alias_substring: Option<u32>,
    /// Display substring weight.
    pub name_substring: Option<u32>,
    /// Fuzzy weight.
    pub fuzzy: Option<u32>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks whether a config file declares `root = true`.
///
/// Unreadable or malformed files are treated as non-root; the error surfaces later when the
/// file is parsed for real.
pub fn is_root_config(path: &Path) -> bool {
    parse_config_file(path)
        .ok()
        .and_then(|config| config.root)
        .unwrap_or(false)
}
