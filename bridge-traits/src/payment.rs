//! Payment widget bridge trait and supporting types.
//!
//! Order creation, capture, and everything that involves money lives in an
//! external host-controlled checkout widget. The core only describes the
//! purchase and reflects the outcome into the page, so the capability
//! surface is deliberately small: create an order, capture it.
//!
//! The capability is optional. A page without a configured widget is a
//! supported state; the checkout controller renders a placeholder message
//! instead of a widget in that case.

use crate::error::Result;
use crate::platform::PlatformSendSync;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual configuration handed to the widget when it is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetStyle {
    /// Button color keyword understood by the widget.
    pub color: String,
    /// Button shape keyword.
    pub shape: String,
    /// Button label keyword.
    pub label: String,
    /// Button height in pixels.
    pub height: u32,
}

impl Default for WidgetStyle {
    fn default() -> Self {
        Self {
            color: "black".to_string(),
            shape: "rect".to_string(),
            label: "pay".to_string(),
            height: 40,
        }
    }
}

/// Purchase description submitted when the widget asks for an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    /// Human-readable purchase description, e.g. `"Midnight Haze — Premium"`.
    pub description: String,
    /// Amount in the widget's configured currency.
    pub amount: f64,
}

impl OrderRequest {
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}

/// Opaque order handle returned by the widget.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(pub String);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Details reported by the widget after a successful capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureDetails {
    /// The captured order.
    pub order_id: OrderId,
    /// Widget-reported capture status, when provided.
    pub status: Option<String>,
}

/// Trait for the external checkout widget.
///
/// Both operations run to their own completion or failure; there is no
/// cancellation primitive, matching the widget's callback contract.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait PaymentProvider: PlatformSendSync {
    /// Ask the widget to create an order for the described purchase.
    async fn create_order(&self, request: OrderRequest) -> Result<OrderId>;

    /// Capture a previously created order once the buyer approved it.
    async fn capture(&self, order: &OrderId) -> Result<CaptureDetails>;
}
