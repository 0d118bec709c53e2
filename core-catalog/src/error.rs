//! Catalog error types.

use thiserror::Error;

/// Errors raised while loading or resolving the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog document could not be fetched (network failure or a
    /// non-success response).
    #[error("Failed to load catalog: {0}")]
    Fetch(#[from] bridge_traits::BridgeError),

    /// The fetched document is not a valid catalog.
    #[error("Malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
