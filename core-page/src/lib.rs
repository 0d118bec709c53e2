//! # Storefront Page Module
//!
//! Rendering, checkout, and event wiring for one artist's storefront page.
//!
//! ## Overview
//!
//! This crate turns a catalog record into markup, routes host events to the
//! preview player, and runs the purchase modal over the external payment
//! widget:
//!
//! - [`view`] - pure catalog-to-view-model mapping, testable without a DOM
//! - [`html`] - markup construction from view models, with escaping
//! - [`page`] - page load: identity, fetch, render, error taxonomy
//! - [`checkout`] - the purchase modal over the [`PaymentProvider`] capability
//! - [`service`] - the [`Storefront`](service::Storefront) facade hosts wire
//!   their events to
//! - [`config`] - capability-injecting configuration builder
//! - [`logging`] - `tracing` bootstrap
//!
//! [`PaymentProvider`]: bridge_traits::PaymentProvider

pub mod checkout;
pub mod config;
pub mod error;
pub mod html;
pub mod logging;
pub mod page;
pub mod service;
pub mod view;

pub use checkout::{CheckoutController, PurchaseIntent};
pub use config::{StorefrontConfig, StorefrontConfigBuilder};
pub use error::{PageError, Result};
pub use logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
pub use page::{ArtistPage, LoadOutcome};
pub use service::Storefront;
pub use view::format_price;
