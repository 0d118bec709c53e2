//! Purchase modal over the external payment widget.
//!
//! The controller owns the modal lifecycle and the single pending purchase.
//! Order creation and capture run through the [`PaymentProvider`]
//! capability when one is configured; without one the modal still opens and
//! shows a setup placeholder where the widget would render.

use crate::error::{PageError, Result};
use crate::html;
use crate::view::format_price;
use bridge_traits::{
    OrderId, OrderRequest, PageSurface, PaymentProvider, Region, WidgetStyle,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The purchase a buy control selected: what to charge and what to unlock.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseIntent {
    /// Purchase description shown in the modal and submitted with the order.
    pub description: String,
    /// License price in the widget's configured currency.
    pub price: f64,
    /// Deliverable revealed after a successful capture.
    pub download_url: String,
}

/// Modal and widget orchestration for one storefront page.
pub struct CheckoutController {
    surface: Arc<dyn PageSurface>,
    provider: Option<Arc<dyn PaymentProvider>>,
    style: WidgetStyle,
    pending: Option<PurchaseIntent>,
}

impl CheckoutController {
    pub fn new(
        surface: Arc<dyn PageSurface>,
        provider: Option<Arc<dyn PaymentProvider>>,
        style: WidgetStyle,
    ) -> Self {
        Self {
            surface,
            provider,
            style,
            pending: None,
        }
    }

    /// Whether a payment provider is configured.
    pub fn provider_available(&self) -> bool {
        self.provider.is_some()
    }

    /// Visual configuration the host passes to the widget when it renders.
    pub fn widget_style(&self) -> &WidgetStyle {
        &self.style
    }

    /// The purchase currently shown in the modal, if any.
    pub fn pending(&self) -> Option<&PurchaseIntent> {
        self.pending.as_ref()
    }

    /// Open the modal for a purchase.
    ///
    /// Populates the item summary, clears any download link and widget
    /// output left over from an earlier purchase, and records the intent.
    /// When no provider is configured the widget container gets a setup
    /// placeholder instead.
    pub fn open(&mut self, intent: PurchaseIntent) {
        debug!(description = %intent.description, price = intent.price, "opening checkout");
        self.surface
            .set_modal_item(&intent.description, &format_price(intent.price));
        self.surface.hide_download();
        let widget_html = if self.provider.is_some() {
            String::new()
        } else {
            html::render_payment_placeholder()
        };
        self.surface.set_region_html(Region::PaymentWidget, &widget_html);
        self.surface.show_modal();
        self.pending = Some(intent);
    }

    /// Close the modal. The pending purchase is dropped; reopening always
    /// starts from a buy control.
    pub fn close(&mut self) {
        self.surface.hide_modal();
        self.pending = None;
    }

    /// Create an order for the pending purchase. Called by the host when
    /// the widget asks for one.
    pub async fn create_order(&self) -> Result<OrderId> {
        let provider = self.provider.as_ref().ok_or(PageError::PaymentNotConfigured)?;
        let intent = self.pending.as_ref().ok_or(PageError::NoPendingPurchase)?;
        let order = provider
            .create_order(OrderRequest::new(intent.description.clone(), intent.price))
            .await?;
        debug!(order = %order, "order created");
        Ok(order)
    }

    /// Capture an approved order and reflect the outcome into the modal.
    ///
    /// Success replaces the widget with a confirmation and reveals the
    /// download link for the purchased license; failure replaces it with a
    /// retryable error message and keeps the purchase pending.
    pub async fn handle_approval(&mut self, order: &OrderId) {
        let (provider, intent) = match (self.provider.as_ref(), self.pending.as_ref()) {
            (Some(provider), Some(intent)) => (provider, intent),
            _ => {
                debug!("approval with no provider or pending purchase, ignoring");
                return;
            }
        };
        match provider.capture(order).await {
            Ok(details) => {
                info!(order = %details.order_id, status = ?details.status, "payment captured");
                self.surface
                    .set_region_html(Region::PaymentWidget, &html::render_payment_success());
                self.surface.show_download(
                    &intent.download_url,
                    &format!("Download {}", intent.description),
                );
                self.pending = None;
            }
            Err(err) => {
                warn!(order = %order, error = %err, "payment capture failed");
                self.surface
                    .set_region_html(Region::PaymentWidget, &html::render_payment_error());
            }
        }
    }
}
