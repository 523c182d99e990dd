//! Error types for catalog loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read a catalog file.
    #[error("failed to read catalog file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file is not valid JSON.
    #[error("failed to parse catalog file {path}: {source}")]
    ParseJson {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The file is valid JSON but its top level is not an array of records.
    #[error("catalog file {path} must contain a JSON array of records")]
    NotAnArray {
        /// Path to the offending file.
        path: PathBuf,
    },
}
