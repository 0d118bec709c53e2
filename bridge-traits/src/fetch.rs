//! Document fetch bridge trait.
//!
//! The storefront loads its catalog from a static document served next to
//! the page. The host owns the transport (browser `fetch`, an HTTP client,
//! or a plain file read in tests); the core only cares about the text body
//! and whether the response was successful.

use crate::error::Result;
use crate::platform::PlatformSendSync;

/// Trait for retrieving static documents by relative path.
///
/// Implementations must treat a non-success response as an error and return
/// [`BridgeError::FetchFailed`](crate::BridgeError::FetchFailed) carrying the
/// status, rather than handing back an error body as if it were the document.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait DataFetcher: PlatformSendSync {
    /// Fetch the document at `path` and return its body as text.
    async fn fetch_text(&self, path: &str) -> Result<String>;
}
