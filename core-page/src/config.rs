//! # Storefront Configuration Module
//!
//! Provides configuration management for the storefront page core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! `StorefrontConfig` instance holding the host capabilities and settings
//! the page needs. It enforces fail-fast validation so a misconfigured host
//! fails at startup with an actionable message instead of failing on the
//! first visitor interaction.
//!
//! ## Required Capabilities
//!
//! - `PageSurface` - Required for all page mutation
//! - `DataFetcher` - Required for loading the catalog document
//! - `AudioBackend` - Required for preview playback
//!
//! ## Optional Capabilities
//!
//! - `PaymentProvider` - Checkout. Without it the purchase modal shows a
//!   setup placeholder instead of the payment widget.
//!
//! ## Usage
//!
//! ```ignore
//! use core_page::StorefrontConfig;
//! use std::sync::Arc;
//!
//! let config = StorefrontConfig::builder()
//!     .surface(Arc::new(MySurface))
//!     .fetcher(Arc::new(MyFetcher))
//!     .audio(Arc::new(MyAudioBackend))
//!     .payment(Arc::new(MyPaymentWidget))
//!     .build()?;
//! # Ok::<(), core_page::PageError>(())
//! ```

use crate::error::{PageError, Result};
use bridge_traits::{AudioBackend, DataFetcher, PageSurface, PaymentProvider, WidgetStyle};
use core_catalog::source::DEFAULT_CATALOG_PATH;
use std::sync::Arc;

/// Widget button heights the external widget accepts, in pixels.
const WIDGET_HEIGHT_RANGE: std::ops::RangeInclusive<u32> = 25..=55;

/// Configuration for one storefront page.
///
/// Holds the injected host capabilities and page settings. Use
/// [`StorefrontConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct StorefrontConfig {
    /// Rendered page the core mutates (required).
    pub surface: Arc<dyn PageSurface>,

    /// Fetch capability for the catalog document (required).
    pub fetcher: Arc<dyn DataFetcher>,

    /// Audio backend for preview playback (required).
    pub audio: Arc<dyn AudioBackend>,

    /// External payment widget (optional).
    pub payment: Option<Arc<dyn PaymentProvider>>,

    /// Relative path of the catalog document.
    pub catalog_path: String,

    /// Visual configuration for the payment widget.
    pub widget_style: WidgetStyle,
}

impl std::fmt::Debug for StorefrontConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontConfig")
            .field("surface", &"PageSurface { ... }")
            .field("fetcher", &"DataFetcher { ... }")
            .field("audio", &"AudioBackend { ... }")
            .field(
                "payment",
                &self.payment.as_ref().map(|_| "PaymentProvider { ... }"),
            )
            .field("catalog_path", &self.catalog_path)
            .field("widget_style", &self.widget_style)
            .finish()
    }
}

impl StorefrontConfig {
    /// Creates a new builder for constructing a `StorefrontConfig`.
    pub fn builder() -> StorefrontConfigBuilder {
        StorefrontConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.catalog_path.is_empty() {
            return Err(PageError::Config(
                "Catalog path cannot be empty".to_string(),
            ));
        }

        if !WIDGET_HEIGHT_RANGE.contains(&self.widget_style.height) {
            return Err(PageError::Config(format!(
                "Widget height {}px is outside the accepted range of {}..={}px",
                self.widget_style.height,
                WIDGET_HEIGHT_RANGE.start(),
                WIDGET_HEIGHT_RANGE.end()
            )));
        }

        Ok(())
    }
}

/// Builder for constructing [`StorefrontConfig`] instances.
///
/// Set capabilities incrementally and call
/// [`build()`](StorefrontConfigBuilder::build) to create the final config.
/// The builder validates required capabilities and settings, and its error
/// messages name the setter to call.
#[derive(Default)]
pub struct StorefrontConfigBuilder {
    surface: Option<Arc<dyn PageSurface>>,
    fetcher: Option<Arc<dyn DataFetcher>>,
    audio: Option<Arc<dyn AudioBackend>>,
    payment: Option<Arc<dyn PaymentProvider>>,
    catalog_path: Option<String>,
    widget_style: Option<WidgetStyle>,
}

impl StorefrontConfigBuilder {
    /// Sets the page surface implementation (required).
    pub fn surface(mut self, surface: Arc<dyn PageSurface>) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Sets the data fetcher implementation (required).
    pub fn fetcher(mut self, fetcher: Arc<dyn DataFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Sets the audio backend implementation (required).
    pub fn audio(mut self, audio: Arc<dyn AudioBackend>) -> Self {
        self.audio = Some(audio);
        self
    }

    /// Sets the payment provider implementation (optional).
    ///
    /// Without one the purchase modal still opens but shows a setup
    /// placeholder where the widget would render.
    pub fn payment(mut self, payment: Arc<dyn PaymentProvider>) -> Self {
        self.payment = Some(payment);
        self
    }

    /// Sets the relative path of the catalog document.
    ///
    /// Default: `data/catalog.json`
    pub fn catalog_path(mut self, path: impl Into<String>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Sets the payment widget's visual configuration.
    ///
    /// Default: black rectangular pay button, 40px tall.
    pub fn widget_style(mut self, style: WidgetStyle) -> Self {
        self.widget_style = Some(style);
        self
    }

    /// Builds the final `StorefrontConfig` instance.
    ///
    /// Returns an error with an actionable message when a required
    /// capability is missing or a setting is invalid.
    pub fn build(self) -> Result<StorefrontConfig> {
        let surface = self.surface.ok_or_else(|| {
            PageError::Config(
                "PageSurface implementation is required for page rendering. \
                 Use .surface() to inject the host's document bridge."
                    .to_string(),
            )
        })?;

        let fetcher = self.fetcher.ok_or_else(|| {
            PageError::Config(
                "DataFetcher implementation is required for loading the catalog. \
                 Use .fetcher() to inject the host's fetch bridge."
                    .to_string(),
            )
        })?;

        let audio = self.audio.ok_or_else(|| {
            PageError::Config(
                "AudioBackend implementation is required for preview playback. \
                 Use .audio() to inject the host's audio bridge."
                    .to_string(),
            )
        })?;

        let config = StorefrontConfig {
            surface,
            fetcher,
            audio,
            payment: self.payment,
            catalog_path: self
                .catalog_path
                .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string()),
            widget_style: self.widget_style.unwrap_or_default(),
        };

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bridge_traits::error::Result as BridgeResult;
    use bridge_traits::{AudioHandle, ControlId, Glyph, Region};

    struct NullSurface;

    impl PageSurface for NullSurface {
        fn set_region_html(&self, _region: Region, _html: &str) {}
        fn set_control_glyph(&self, _control: &ControlId, _glyph: Glyph) {}
        fn set_transport_track(&self, _title: &str) {}
        fn set_transport_glyph(&self, _glyph: Glyph) {}
        fn set_progress(&self, _percent: f64, _elapsed: &str, _total: &str) {}
        fn set_modal_item(&self, _title: &str, _price_label: &str) {}
        fn show_modal(&self) {}
        fn hide_modal(&self) {}
        fn show_download(&self, _href: &str, _label: &str) {}
        fn hide_download(&self) {}
    }

    struct NullFetcher;

    #[async_trait]
    impl DataFetcher for NullFetcher {
        async fn fetch_text(&self, _path: &str) -> BridgeResult<String> {
            Ok(String::new())
        }
    }

    struct NullBackend;

    impl AudioBackend for NullBackend {
        fn open(&self, _url: &str) -> BridgeResult<Box<dyn AudioHandle>> {
            Err(bridge_traits::BridgeError::NotAvailable(
                "no audio in tests".to_string(),
            ))
        }
    }

    fn complete_builder() -> StorefrontConfigBuilder {
        StorefrontConfig::builder()
            .surface(Arc::new(NullSurface))
            .fetcher(Arc::new(NullFetcher))
            .audio(Arc::new(NullBackend))
    }

    #[test]
    fn build_with_defaults() {
        let config = complete_builder().build().unwrap();
        assert_eq!(config.catalog_path, DEFAULT_CATALOG_PATH);
        assert_eq!(config.widget_style, WidgetStyle::default());
        assert!(config.payment.is_none());
    }

    #[test]
    fn builder_requires_surface() {
        let result = StorefrontConfig::builder()
            .fetcher(Arc::new(NullFetcher))
            .audio(Arc::new(NullBackend))
            .build();

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("PageSurface"));
        assert!(err_msg.contains(".surface()"));
    }

    #[test]
    fn builder_requires_fetcher() {
        let result = StorefrontConfig::builder()
            .surface(Arc::new(NullSurface))
            .audio(Arc::new(NullBackend))
            .build();

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("DataFetcher"));
        assert!(err_msg.contains(".fetcher()"));
    }

    #[test]
    fn builder_requires_audio() {
        let result = StorefrontConfig::builder()
            .surface(Arc::new(NullSurface))
            .fetcher(Arc::new(NullFetcher))
            .build();

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("AudioBackend"));
        assert!(err_msg.contains(".audio()"));
    }

    #[test]
    fn validate_rejects_empty_catalog_path() {
        let result = complete_builder().catalog_path("").build();
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Catalog path cannot be empty"));
    }

    #[test]
    fn validate_rejects_out_of_range_widget_height() {
        let style = WidgetStyle {
            height: 80,
            ..WidgetStyle::default()
        };
        let result = complete_builder().widget_style(style).build();
        assert!(result.unwrap_err().to_string().contains("Widget height"));
    }

    #[test]
    fn custom_catalog_path_is_kept() {
        let config = complete_builder().catalog_path("data/alt.json").build().unwrap();
        assert_eq!(config.catalog_path, "data/alt.json");
    }
}
