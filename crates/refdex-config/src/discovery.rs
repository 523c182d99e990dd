//! Configuration file discovery.
//!
//! Discovers `.refdex.toml` files by walking up the directory tree from a starting point,
//! then appending the global `~/.refdex.toml` if present.

use std::path::{Path, PathBuf};

use crate::{parse::is_root_config, resolve::home_dir};

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".refdex.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global (`~/.refdex.toml`)
/// last. Files closer to `cwd` have higher precedence during merging.
///
/// The walk stops at the first file with `root = true`; in that case the global file is
/// not consulted either.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();
    let mut found_root = false;

    let mut current = Some(cwd);
    while let Some(dir) = current {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.is_file() {
            let is_root = is_root_config(&config_path);
            configs.push(config_path);
            if is_root {
                found_root = true;
                break;
            }
        }
        current = dir.parent();
    }

    if !found_root
        && let Some(global_path) = global_config_path()
        && global_path.is_file()
        && !configs.contains(&global_path)
    {
        configs.push(global_path);
    }

    configs
}

/// Returns the path to the global configuration file (`~/.refdex.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    home_dir().ok().map(|home| home.join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::ConfigTree;

    /// Drops the global config (if the test machine has one) from discovered paths.
    fn local_only(configs: &[PathBuf]) -> Vec<&PathBuf> {
        configs.iter().filter(|p| !is_global_config(p)).collect()
    }

    #[test]
    fn test_discover_no_configs() {
        let tree = ConfigTree::new();
        let subdir = tree.dir("a/b/c");

        let configs = discover_config_files(&subdir);

        for config in &configs {
            assert!(is_global_config(config), "unexpected config: {config:?}");
        }
    }

    #[test]
    fn test_discover_single_config() {
        let tree = ConfigTree::new();
        let config = tree.config("", "# root config\n");
        let subdir = tree.dir("a/b/c");

        let configs = discover_config_files(&subdir);
        let local = local_only(&configs);

        assert_eq!(local.len(), 1);
        assert_eq!(local[0], &config);
    }

    #[test]
    fn test_discover_precedence_order() {
        let tree = ConfigTree::new();
        let root_config = tree.config("", "# root config\n");
        let mid_config = tree.config("clinic", "");
        let leaf_config = tree.config("clinic/ed/shift", "");
        let working_dir = tree.dir("clinic/ed/shift/notes");

        let configs = discover_config_files(&working_dir);
        let local = local_only(&configs);

        assert_eq!(local.len(), 3);
        assert_eq!(local[0], &leaf_config);
        assert_eq!(local[1], &mid_config);
        assert_eq!(local[2], &root_config);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().ends_with(CONFIG_FILENAME));
    }

    #[test]
    fn test_global_config_lives_in_home_dir() {
        let home = home_dir().unwrap();
        assert_eq!(global_config_path(), Some(home.join(CONFIG_FILENAME)));
    }

    #[test]
    fn test_is_global_config() {
        let global = global_config_path().unwrap();
        assert!(is_global_config(&global));
        assert!(!is_global_config(Path::new("/some/other/path/.refdex.toml")));
    }

    #[test]
    fn test_discover_skips_directory_named_like_config() {
        let tree = ConfigTree::new();
        fs::create_dir_all(tree.path().join(CONFIG_FILENAME)).unwrap();
        let subdir = tree.dir("subdir");

        let configs = discover_config_files(&subdir);
        assert!(local_only(&configs).is_empty());
    }

    #[test]
    fn test_root_config_stops_discovery() {
        let tree = ConfigTree::new();
        let _parent_config = tree.config("", "# root config\n");
        let root_config = tree.config("project", "root = true\n");
        let working_dir = tree.dir("project/data");

        let configs = discover_config_files(&working_dir);

        assert_eq!(configs, vec![root_config]);
    }

    #[test]
    fn test_root_config_includes_child_configs() {
        let tree = ConfigTree::new();
        let _parent_config = tree.config("", "# root config\n");
        let root_config = tree.config("project", "root = true\n");
        let child_config = tree.config("project/sub", "");
        let working_dir = tree.dir("project/sub/deep");

        let configs = discover_config_files(&working_dir);

        assert_eq!(configs, vec![child_config, root_config]);
    }

    #[test]
    fn test_root_false_does_not_stop_discovery() {
        let tree = ConfigTree::new();
        let parent_config = tree.config("", "# root config\n");
        let mid_config = tree.config("project", "root = false\n");
        let working_dir = tree.dir("project/src");

        let configs = discover_config_files(&working_dir);
        let local = local_only(&configs);

        assert_eq!(local, vec![&mid_config, &parent_config]);
    }
}
