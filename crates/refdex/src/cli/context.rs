//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use refdex_config::Config;
use refdex_index::{Searcher, open_searcher};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (default if no config files were found).
    pub config: Config,
    /// Searcher built on first use and reused for the rest of the invocation.
    searcher: Option<Searcher>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            searcher: None,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for commands like `init` or `inspect query` that should work even when
    /// an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            searcher: None,
        })
    }

    /// Ensures at least one catalog is configured, optionally printing an init hint.
    pub fn require_catalogs(&self, show_init_hint: bool) -> Result<(), ExitCode> {
        if self.config.catalogs.is_empty() {
            eprintln!("error: no catalogs defined in configuration");
            if show_init_hint {
                eprintln!(
                    "Run 'refdex init' to create a configuration file, then add [[catalog]] entries."
                );
            }
            return Err(ExitCode::FAILURE);
        }
        Ok(())
    }

    /// Returns the searcher, loading every catalog on first use.
    pub fn searcher(&mut self, show_init_hint: bool) -> Result<&Searcher, ExitCode> {
        if self.searcher.is_none() {
            self.require_catalogs(show_init_hint)?;
            let searcher = open_searcher(&self.config).map_err(|e| {
                eprintln!("error: failed to load catalogs: {e}");
                ExitCode::FAILURE
            })?;
            self.searcher = Some(searcher);
        }
        self.searcher.as_ref().ok_or(ExitCode::FAILURE)
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use refdex_config::Catalog;

    use super::*;

    /// Builds a context whose config lists a single catalog file.
    fn context_with_catalog(path: PathBuf) -> CommandContext {
        let mut config = Config::default();
        config.catalogs.push(Catalog {
            name: "billing".to_string(),
            paths: vec![path],
            is_global: false,
        });
        CommandContext {
            cwd: PathBuf::from("."),
            config,
            searcher: None,
        }
    }

    #[test]
    fn searcher_without_catalogs_fails() {
        let mut ctx = CommandContext {
            cwd: PathBuf::from("."),
            config: Config::default(),
            searcher: None,
        };
        assert!(ctx.searcher(false).is_err());
    }

    #[test]
    fn searcher_is_built_once() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("billing.json");
        fs::write(&path, r#"[{"code": "H102", "name": "Weekday daytime - visit"}]"#).unwrap();
        let mut ctx = context_with_catalog(path.clone());

        assert!(ctx.searcher(false).unwrap().lookup("H102").is_some());

        fs::remove_file(&path).unwrap();
        assert!(ctx.searcher(false).unwrap().lookup("H102").is_some());
    }
}
