//! # Catalog Module
//!
//! Data model and accessor for the static artist catalog.
//!
//! ## Overview
//!
//! This crate handles:
//! - The catalog document shape (`Catalog` → `Artist` → `Beat` → `License`)
//! - Loading the document through the host's [`DataFetcher`] capability
//! - Resolving the page's artist identity from its query string
//!
//! The catalog is read-only for the lifetime of a page view: it is fetched
//! once, never cached, never retried, and discarded on unload.
//!
//! [`DataFetcher`]: bridge_traits::DataFetcher

pub mod error;
pub mod models;
pub mod query;
pub mod source;

pub use error::{CatalogError, Result};
pub use models::{Artist, Beat, Catalog, License};
pub use query::artist_id_from_query;
pub use source::CatalogSource;
