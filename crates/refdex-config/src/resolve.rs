//! Path resolution for catalog definitions.
//!
//! Resolves relative and tilde-prefixed catalog paths to absolute paths.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a catalog file path to an absolute path.
///
/// Handles three cases:
/// - Tilde paths (`~/data/codes.json`) expand to the home directory
/// - Relative paths (`data/codes.json`, `../shared/codes.json`) resolve against `config_dir`
/// - Absolute paths are returned as-is
///
/// Existing files are canonicalized. A missing file is not an error here: it is reported
/// by validation and again when the catalog is loaded.
pub fn resolve_catalog_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        config_dir.join(&expanded)
    };

    Ok(absolute.canonicalize().unwrap_or(absolute))
}

/// Expands a tilde prefix to the home directory.
///
/// - `~` alone becomes the home directory
/// - `~/foo` becomes home directory joined with `foo`
/// - Paths not starting with `~` are returned unchanged
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the current user's home directory.
pub fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ConfigTree;

    #[test]
    fn test_resolve_relative_path() {
        let tree = ConfigTree::new();
        let catalog = tree.catalog("data/billing.json", &["H102"]);

        let resolved = resolve_catalog_path("data/billing.json", tree.path()).unwrap();

        assert_eq!(resolved, catalog.canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_parent_relative_path() {
        let tree = ConfigTree::new();
        let catalog = tree.catalog("shared/dx.json", &["H102"]);
        let config_dir = tree.dir("clinic");

        let resolved = resolve_catalog_path("../shared/dx.json", &config_dir).unwrap();

        assert_eq!(resolved, catalog.canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_absolute_path() {
        let tree = ConfigTree::new();
        let catalog = tree.catalog("codes.json", &["H102"]);
        let abs = catalog.to_str().unwrap();

        let resolved = resolve_catalog_path(abs, Path::new("/unrelated")).unwrap();

        assert_eq!(resolved, catalog.canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_missing_file_keeps_joined_path() {
        let resolved = resolve_catalog_path("missing.json", Path::new("/work/clinic")).unwrap();
        assert_eq!(resolved, PathBuf::from("/work/clinic/missing.json"));
    }

    #[test]
    fn test_expand_tilde_alone() {
        let home = home_dir().unwrap();
        assert_eq!(expand_tilde("~").unwrap(), home);
    }

    #[test]
    fn test_expand_tilde_with_path() {
        let home = home_dir().unwrap();
        assert_eq!(
            expand_tilde("~/codes/billing.json").unwrap(),
            home.join("codes/billing.json")
        );
    }

    #[test]
    fn test_expand_tilde_leaves_other_paths() {
        assert_eq!(
            expand_tilde("data/~weird.json").unwrap(),
            PathBuf::from("data/~weird.json")
        );
    }
}
