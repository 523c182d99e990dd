//! Fixture trees for refdex-config unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A temporary directory laid out like a clinic's catalog tree.
pub struct ConfigTree {
    /// Owned temporary directory, removed on drop.
    root: TempDir,
}

impl ConfigTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Returns the tree root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory at `rel`.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.root.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes a catalog file at `rel` with one record per code.
    pub fn catalog(&self, rel: &str, codes: &[&str]) -> PathBuf {
        let records: Vec<String> = codes
            .iter()
            .map(|code| format!(r#"{{"code": "{code}", "name": "Record {code}"}}"#))
            .collect();
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, format!("[{}]", records.join(", "))).unwrap();
        path
    }

    /// Writes `.refdex.toml` in directory `rel` (empty for the root).
    pub fn config(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir(rel).join(CONFIG_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }

    /// Writes a root config in `rel` declaring each `(name, catalog path)` pair, and creates
    /// every catalog file relative to that directory. Returns the project directory.
    pub fn project(&self, rel: &str, catalogs: &[(&str, &str)]) -> PathBuf {
        let mut content = String::from("root = true\n");
        for (name, path) in catalogs {
            self.catalog(&format!("{rel}/{path}"), &[]);
            content.push_str(&format!("\n[[catalog]]\nname = \"{name}\"\npath = \"{path}\"\n"));
        }
        self.config(rel, &content);
        self.dir(rel)
    }
}
