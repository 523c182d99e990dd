//! Reading catalog files from disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{CatalogError, Collection, Record};

/// Reads and decodes a JSON catalog file.
///
/// The file must hold a JSON array. Each element becomes one [`Record`]; malformed
/// elements degrade to empty records instead of failing the load.
pub fn load_records(path: &Path) -> Result<Vec<Record>, CatalogError> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_records(&contents, path)
}

/// Decodes catalog records from a JSON string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_records(contents: &str, path: &Path) -> Result<Vec<Record>, CatalogError> {
    let value: Value = serde_json::from_str(contents).map_err(|source| CatalogError::ParseJson {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Array(entries) = value else {
        return Err(CatalogError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    Ok(entries.into_iter().map(Record::from_value).collect())
}

/// Loads a named collection from one or more catalog files.
///
/// Records keep the order of `paths`, then file order within each file. That order is
/// the curator's order and serves as the ranking tie-breaker.
pub fn load_collection(name: &str, paths: &[PathBuf]) -> Result<Collection, CatalogError> {
    let mut records = Vec::new();
    for path in paths {
        records.extend(load_records(path)?);
    }

    Ok(Collection {
        name: name.to_string(),
        records,
    })
}
