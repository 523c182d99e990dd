//! Configuration system for refdex.
//!
//! refdex uses TOML configuration files named `.refdex.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.refdex.toml` files found, then loading `~/.refdex.toml` as the global config with lowest
//! precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawCatalog, RawConfig, RawSearchSettings, RawWeights, parse_config_file, parse_config_str,
};
pub use resolve::{home_dir, resolve_catalog_path};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for refdex.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.refdex.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Matching thresholds and result limits.
    pub search: SearchSettings,
    /// Score awarded by each matching tier.
    pub weights: TierWeights,
    /// Catalogs in search order, with resolved file paths.
    pub catalogs: Vec<Catalog>,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.refdex.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.refdex.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.refdex.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    ///
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - Empty configuration (no catalogs defined)
    /// - Catalog files that don't exist or aren't regular files
    /// - Tier weights that would let a weaker tier outrank a stronger one
    /// - Settings that silently disable part of the matching pipeline
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Looks up a catalog definition by name.
    pub fn catalog(&self, name: &str) -> Option<&Catalog> {
        self.catalogs.iter().find(|c| c.name == name)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.refdex.toml` file. Catalogs are not included
    /// since they carry resolved paths and provenance.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            search: self.search.clone(),
            weights: self.weights.clone(),
        };
        toml::to_string_pretty(&serializable).map_err(ConfigError::Serialize)
    }
}

/// Default result cap per catalog.
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Default multiplier applied to multi-token queries.
pub const DEFAULT_MULTI_TOKEN_BONUS: f32 = 1.5;

/// Matching thresholds and result limits.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum results returned per catalog. The total match count is reported separately.
    pub max_results: usize,
    /// Multiplier applied to the summed token scores of multi-token queries.
    pub multi_token_bonus: f32,
    /// Shortest token that may match a code prefix.
    pub min_prefix_length: usize,
    /// Shortest token that may match inside alias terms or display text.
    pub min_substring_length: usize,
    /// Shortest token eligible for typo-tolerant matching.
    pub min_fuzzy_length: usize,
    /// Largest edit distance accepted by fuzzy matching (0 disables it).
    pub max_edit_distance: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            multi_token_bonus: DEFAULT_MULTI_TOKEN_BONUS,
            min_prefix_length: 2,
            min_substring_length: 3,
            min_fuzzy_length: 4,
            max_edit_distance: 1,
        }
    }
}

/// Score awarded by each matching tier, strongest tier first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TierWeights {
    /// Token equals the record code.
    pub code_exact: u32,
    /// Record code starts with the token.
    pub code_prefix: u32,
    /// Token equals an alias term.
    pub alias_exact: u32,
    /// Token equals a word of the display text.
    pub name_word: u32,
    /// Token occurs inside an alias term.
    pub alias_substring: u32,
    /// Token occurs inside the display text.
    pub name_substring: u32,
    /// Token is within the edit distance limit of an alias or display word.
    pub fuzzy: u32,
}

impl TierWeights {
    /// Returns `(key, weight)` pairs in tier precedence order.
    pub fn ordered(&self) -> [(&'static str, u32); 7] {
        [
            ("code_exact", self.code_exact),
            ("code_prefix", self.code_prefix),
            ("alias_exact", self.alias_exact),
            ("name_word", self.name_word),
            ("alias_substring", self.alias_substring),
            ("name_substring", self.name_substring),
            ("fuzzy", self.fuzzy),
        ]
    }
}

impl Default for TierWeights {
    fn default() -> Self {
        Self {
            code_exact: 100,
            code_prefix: 60,
            alias_exact: 50,
            name_word: 45,
            alias_substring: 25,
            name_substring: 20,
            fuzzy: 10,
        }
    }
}

/// A catalog definition with resolved file paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Catalog name, used to label result sets.
    pub name: String,
    /// JSON files whose records make up the catalog, in load order.
    pub paths: Vec<PathBuf>,
    /// Whether the catalog was declared in the global config.
    pub is_global: bool,
}

/// Settings in the shape of a `.refdex.toml` file, for display.
#[derive(Serialize)]
struct SerializableSettings {
    /// `[search]` section.
    search: SearchSettings,
    /// `[weights]` section.
    weights: TierWeights,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ConfigTree;

    #[test]
    fn test_default_weights_strictly_descend() {
        let ordered = TierWeights::default().ordered();
        for pair in ordered.windows(2) {
            assert!(pair[0].1 > pair[1].1, "{} <= {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_settings_to_toml_round_trips() {
        let config = Config::default();
        let rendered = config.settings_to_toml().unwrap();

        assert!(rendered.contains("[search]"));
        assert!(rendered.contains("max_results = 50"));
        assert!(rendered.contains("[weights]"));

        let raw = parse_config_str(&rendered, Path::new("effective.toml")).unwrap();
        let weights = raw.weights.unwrap();
        assert_eq!(weights.code_exact, Some(100));
        assert_eq!(weights.fuzzy, Some(10));
    }

    #[test]
    fn test_catalog_lookup_by_name() {
        let config = Config {
            catalogs: vec![Catalog {
                name: "billing".into(),
                paths: vec![PathBuf::from("/data/billing.json")],
                is_global: false,
            }],
            ..Config::default()
        };

        assert!(config.catalog("billing").is_some());
        assert!(config.catalog("diagnostic").is_none());
    }

    #[test]
    fn test_load_resolves_project_catalogs() {
        let tree = ConfigTree::new();
        let project = tree.project(
            "clinic",
            &[("billing", "data/billing.json"), ("diagnostic", "data/dx.json")],
        );
        let working_dir = tree.dir("clinic/notes");

        let config = Config::load(&working_dir).unwrap();

        let names: Vec<_> = config.catalogs.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["billing", "diagnostic"]);
        assert_eq!(
            config.catalogs[0].paths,
            vec![project.join("data/billing.json").canonicalize().unwrap()]
        );
        assert!(config.validate().is_empty());
    }
}
