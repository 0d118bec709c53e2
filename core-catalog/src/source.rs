//! Catalog accessor.

use crate::error::Result;
use crate::models::Catalog;
use bridge_traits::DataFetcher;
use std::sync::Arc;
use tracing::debug;

/// Default relative path of the catalog document.
pub const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";

/// Loads the catalog document through the host's fetch capability.
///
/// There is no caching and no retry: the document is small, static, and
/// fetched once per page view. Callers that need the catalog twice call
/// [`load`](CatalogSource::load) twice.
pub struct CatalogSource {
    fetcher: Arc<dyn DataFetcher>,
    path: String,
}

impl CatalogSource {
    /// Create a source reading from [`DEFAULT_CATALOG_PATH`].
    pub fn new(fetcher: Arc<dyn DataFetcher>) -> Self {
        Self::with_path(fetcher, DEFAULT_CATALOG_PATH)
    }

    /// Create a source reading from a custom relative path.
    pub fn with_path(fetcher: Arc<dyn DataFetcher>, path: impl Into<String>) -> Self {
        Self {
            fetcher,
            path: path.into(),
        }
    }

    /// Fetch and parse the catalog document.
    pub async fn load(&self) -> Result<Catalog> {
        let body = self.fetcher.fetch_text(&self.path).await?;
        let catalog: Catalog = serde_json::from_str(&body)?;
        debug!(path = %self.path, artists = catalog.artists.len(), "catalog loaded");
        Ok(catalog)
    }
}
