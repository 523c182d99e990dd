//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::{Catalog, Config};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// No catalogs are defined.
    NoCatalogsDefined,
    /// A catalog lists no files.
    CatalogHasNoFiles {
        /// Name of the catalog.
        catalog: String,
    },
    /// A catalog file does not exist.
    CatalogFileMissing {
        /// Name of the catalog.
        catalog: String,
        /// Path that doesn't exist.
        path: String,
    },
    /// A catalog path exists but is not a regular file.
    CatalogPathNotFile {
        /// Name of the catalog.
        catalog: String,
        /// Path that is not a file.
        path: String,
    },
    /// A tier weight is not below the weight of the tier above it.
    WeightsOutOfOrder {
        /// The stronger tier.
        higher: &'static str,
        /// The weaker tier whose weight caught up.
        lower: &'static str,
    },
    /// The multi-token bonus would penalize multi-word queries.
    BonusBelowOne {
        /// Configured multiplier.
        bonus: f32,
    },
    /// `max_results` is zero, so every result list is empty.
    ZeroResultCap,
    /// `max_edit_distance` is zero, so typo tolerance is off.
    FuzzyDisabled,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCatalogsDefined => {
                write!(f, "no catalogs are defined in configuration")
            }
            Self::CatalogHasNoFiles { catalog } => {
                write!(f, "catalog '{catalog}' lists no files")
            }
            Self::CatalogFileMissing { catalog, path } => {
                write!(f, "catalog '{catalog}' file does not exist: {path}")
            }
            Self::CatalogPathNotFile { catalog, path } => {
                write!(f, "catalog '{catalog}' path is not a file: {path}")
            }
            Self::WeightsOutOfOrder { higher, lower } => {
                write!(
                    f,
                    "weight '{lower}' is not below weight '{higher}'; weaker matches may outrank stronger ones"
                )
            }
            Self::BonusBelowOne { bonus } => {
                write!(f, "multi_token_bonus {bonus} is below 1.0")
            }
            Self::ZeroResultCap => {
                write!(f, "max_results is 0; searches will show no results")
            }
            Self::FuzzyDisabled => {
                write!(f, "max_edit_distance is 0; fuzzy matching is disabled")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.catalogs.is_empty() {
        warnings.push(ConfigWarning::NoCatalogsDefined);
    }
    for catalog in &config.catalogs {
        warnings.extend(validate_catalog(catalog));
    }

    for pair in config.weights.ordered().windows(2) {
        let (higher, higher_weight) = pair[0];
        let (lower, lower_weight) = pair[1];
        if lower_weight >= higher_weight {
            warnings.push(ConfigWarning::WeightsOutOfOrder { higher, lower });
        }
    }

    let search = &config.search;
    if search.multi_token_bonus < 1.0 {
        warnings.push(ConfigWarning::BonusBelowOne {
            bonus: search.multi_token_bonus,
        });
    }
    if search.max_results == 0 {
        warnings.push(ConfigWarning::ZeroResultCap);
    }
    if search.max_edit_distance == 0 {
        warnings.push(ConfigWarning::FuzzyDisabled);
    }

    warnings
}

/// Validates the files of a single catalog.
fn validate_catalog(catalog: &Catalog) -> Vec<ConfigWarning> {
    if catalog.paths.is_empty() {
        return vec![ConfigWarning::CatalogHasNoFiles {
            catalog: catalog.name.clone(),
        }];
    }

    let mut warnings = Vec::new();
    for path in &catalog.paths {
        if !path.exists() {
            warnings.push(ConfigWarning::CatalogFileMissing {
                catalog: catalog.name.clone(),
                path: path.display().to_string(),
            });
        } else if !path.is_file() {
            warnings.push(ConfigWarning::CatalogPathNotFile {
                catalog: catalog.name.clone(),
                path: path.display().to_string(),
            });
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{SearchSettings, TierWeights, test_support::ConfigTree};

    fn catalog(name: &str, paths: Vec<PathBuf>) -> Catalog {
        Catalog {
            name: name.into(),
            paths,
            is_global: false,
        }
    }

    #[test]
    fn test_no_catalogs_warning() {
        let warnings = validate_config(&Config::default());
        assert_eq!(warnings, vec![ConfigWarning::NoCatalogsDefined]);
    }

    #[test]
    fn test_valid_config_has_no_warnings() {
        let tree = ConfigTree::new();
        let file = tree.catalog("billing.json", &["H102"]);
        let config = Config {
            catalogs: vec![catalog("billing", vec![file])],
            ..Config::default()
        };

        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn test_missing_and_directory_paths() {
        let tree = ConfigTree::new();
        let dir = tree.dir("not-a-file");
        let missing = tree.path().join("missing.json");
        let config = Config {
            catalogs: vec![catalog("dx", vec![missing.clone(), dir.clone()])],
            ..Config::default()
        };

        let warnings = validate_config(&config);
        assert_eq!(
            warnings,
            vec![
                ConfigWarning::CatalogFileMissing {
                    catalog: "dx".into(),
                    path: missing.display().to_string(),
                },
                ConfigWarning::CatalogPathNotFile {
                    catalog: "dx".into(),
                    path: dir.display().to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_catalog_without_files() {
        let config = Config {
            catalogs: vec![catalog("empty", Vec::new())],
            ..Config::default()
        };

        assert_eq!(
            validate_config(&config),
            vec![ConfigWarning::CatalogHasNoFiles {
                catalog: "empty".into()
            }]
        );
    }

    #[test]
    fn test_fuzzy_weight_above_substring_is_flagged() {
        let tree = ConfigTree::new();
        let file = tree.catalog("billing.json", &["H102"]);
        let config = Config {
            weights: TierWeights {
                fuzzy: 30,
                ..TierWeights::default()
            },
            catalogs: vec![catalog("billing", vec![file])],
            ..Config::default()
        };

        assert_eq!(
            validate_config(&config),
            vec![ConfigWarning::WeightsOutOfOrder {
                higher: "name_substring",
                lower: "fuzzy",
            }]
        );
    }

    #[test]
    fn test_search_setting_warnings() {
        let tree = ConfigTree::new();
        let file = tree.catalog("billing.json", &["H102"]);
        let config = Config {
            search: SearchSettings {
                multi_token_bonus: 0.5,
                max_results: 0,
                max_edit_distance: 0,
                ..SearchSettings::default()
            },
            catalogs: vec![catalog("billing", vec![file])],
            ..Config::default()
        };

        let warnings = validate_config(&config);
        assert!(warnings.contains(&ConfigWarning::BonusBelowOne { bonus: 0.5 }));
        assert!(warnings.contains(&ConfigWarning::ZeroResultCap));
        assert!(warnings.contains(&ConfigWarning::FuzzyDisabled));
    }

    #[test]
    fn test_warning_display() {
        let warning = ConfigWarning::CatalogFileMissing {
            catalog: "billing".into(),
            path: "/data/billing.json".into(),
        };
        assert_eq!(
            warning.to_string(),
            "catalog 'billing' file does not exist: /data/billing.json"
        );
    }
}
