//! Error types for the refdex-index crate.

use refdex_catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur while opening a searcher.
///
/// Scoring itself never fails; these only cover assembling the catalog index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A configured catalog could not be loaded.
    #[error("failed to load catalog '{name}': {source}")]
    LoadCatalog {
        /// Catalog name from configuration.
        name: String,
        /// Underlying load error.
        source: CatalogError,
    },

    /// Configuration defines no catalogs.
    #[error("no catalogs configured; add a [[catalog]] entry to .refdex.toml")]
    NoCatalogs,
}
