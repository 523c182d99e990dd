//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving catalog paths.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::{
    Catalog, Config, ConfigError, SearchSettings, TierWeights,
    discovery::is_global_config,
    parse::{RawConfig, RawSearchSettings, RawWeights},
    resolve::resolve_catalog_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Catalogs: merged by name, first definition wins completely
/// - Catalog order: first appearance, scanning from highest to lowest precedence
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let search = merge_search_settings(configs);
    let weights = merge_weights(configs);
    let catalogs = merge_catalogs(configs)?;
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(Path::to_path_buf);

    Ok(Config {
        search,
        weights,
        catalogs,
        config_root,
    })
}

/// Merges search settings.
fn merge_search_settings(configs: &[ParsedConfig]) -> SearchSettings {
    let mut result = SearchSettings::default();

    // Lowest precedence first so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref search) = parsed.config.search {
            apply_raw_search(&mut result, search);
        }
    }

    result
}

/// Applies raw search settings to result, overwriting any present values.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.max_results {
        result.max_results = v;
    }
    if let Some(v) = raw.multi_token_bonus {
        result.multi_token_bonus = v;
    }
    if let Some(v) = raw.min_prefix_length {
        result.min_prefix_length = v;
    }
    if let Some(v) = raw.min_substring_length {
        result.min_substring_length = v;
    }
    if let Some(v) = raw.min_fuzzy_length {
        result.min_fuzzy_length = v;
    }
    if let Some(v) = raw.max_edit_distance {
        result.max_edit_distance = v;
    }
}

/// Merges tier weights.
fn merge_weights(configs: &[ParsedConfig]) -> TierWeights {
    let mut result = TierWeights::default();

    for parsed in configs.iter().rev() {
        if let Some(ref weights) = parsed.config.weights {
            apply_raw_weights(&mut result, weights);
        }
    }

    result
}

/// Applies raw tier weights to result.
fn apply_raw_weights(result: &mut TierWeights, raw: &RawWeights) {
    if let Some(v) = raw.code_exact {
        result.code_exact = v;
    }
    if let Some(v) = raw.code_prefix {
        result.code_prefix = v;
    }
    if let Some(v) = raw.alias_exact {
        result.alias_exact = v;
    }
    if let Some(v) = raw.name_word {
        result.name_word = v;
    }
    if let Some(v) = raw.alias_substring {
        result.alias_substring = v;
    }
    if let Some(v) = raw.name_substring {
        result.name_substring = v;
    }
    if let Some(v) = raw.fuzzy {
        result.fuzzy = v;
    }
}

/// Merges catalog definitions by name, first definition wins.
fn merge_catalogs(configs: &[ParsedConfig]) -> Result<Vec<Catalog>, ConfigError> {
    let mut seen = HashSet::new();
    let mut catalogs = Vec::new();

    for parsed in configs {
        let Some(ref raw_catalogs) = parsed.config.catalog else {
            continue;
        };
        let config_dir = parsed.path.parent().unwrap_or_else(|| Path::new("."));
        let is_global = is_global_config(&parsed.path);

        for raw in raw_catalogs {
            let name = raw.name.trim();
            if name.is_empty() {
                return Err(ConfigError::EmptyCatalogName {
                    path: parsed.path.clone(),
                });
            }
            if !seen.insert(name.to_string()) {
                continue;
            }

            let paths = raw
                .path
                .iter()
                .map(|p| resolve_catalog_path(p, config_dir))
                .collect::<Result<Vec<_>, _>>()?;

            catalogs.push(Catalog {
                name: name.to_string(),
                paths,
                is_global,
            });
        }
    }

    Ok(catalogs)
}
