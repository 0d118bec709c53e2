//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host
//! environment the storefront page runs in.
//!
//! ## Overview
//!
//! This crate defines the contract between the storefront core and the
//! host-owned facilities it drives but does not implement. Each trait
//! represents a capability the core requires:
//!
//! - [`PageSurface`](surface::PageSurface) - The rendered page: regions,
//!   play-control glyphs, the transport bar, the purchase modal
//! - [`AudioBackend`](audio::AudioBackend) / [`AudioHandle`](audio::AudioHandle) -
//!   Preview audio playback via the host media element
//! - [`PaymentProvider`](payment::PaymentProvider) - The external checkout
//!   widget (order creation and capture)
//! - [`DataFetcher`](fetch::DataFetcher) - Retrieval of the static catalog
//!   document
//!
//! ## Error Handling
//!
//! All bridge traits use [`BridgeError`](error::BridgeError). Host
//! implementations should convert environment-specific failures into the
//! matching variant and keep messages actionable.
//!
//! ## Thread Safety
//!
//! Trait bounds use the [`platform`] marker traits so that native builds
//! require `Send + Sync` while single-threaded `wasm32` builds do not.

pub mod audio;
pub mod error;
pub mod fetch;
pub mod payment;
pub mod platform;
pub mod surface;

pub use error::BridgeError;

// Re-export commonly used types
pub use audio::{AudioBackend, AudioHandle};
pub use fetch::DataFetcher;
pub use payment::{CaptureDetails, OrderId, OrderRequest, PaymentProvider, WidgetStyle};
pub use surface::{ControlId, Glyph, PageSurface, Region};
