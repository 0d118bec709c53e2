//! The storefront facade.
//!
//! One object per page view, built from a validated [`StorefrontConfig`].
//! Hosts wire their document events to the methods here; each method runs
//! to completion before the host dispatches the next one, which is what
//! lets the underlying player keep at most one preview active without
//! locking.

use crate::checkout::{CheckoutController, PurchaseIntent};
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::page::{ArtistPage, LoadOutcome};
use bridge_traits::{ControlId, OrderId, WidgetStyle};
use core_catalog::CatalogSource;
use core_player::PreviewPlayer;

/// Facade over page load, preview playback, and checkout.
pub struct Storefront {
    page: ArtistPage,
    player: PreviewPlayer,
    checkout: CheckoutController,
}

impl Storefront {
    /// Assemble a storefront from a validated configuration.
    pub fn new(config: StorefrontConfig) -> Self {
        let source = CatalogSource::with_path(config.fetcher.clone(), config.catalog_path);
        Self {
            page: ArtistPage::new(config.surface.clone(), source),
            player: PreviewPlayer::new(config.audio, config.surface.clone()),
            checkout: CheckoutController::new(
                config.surface,
                config.payment,
                config.widget_style,
            ),
        }
    }

    /// Load and render the page for the given query string.
    pub async fn load(&self, query: &str) -> LoadOutcome {
        self.page.load(query).await
    }

    /// A per-beat play control was clicked.
    pub async fn play_clicked(&mut self, control: ControlId, preview_url: &str, title: &str) {
        self.player.toggle_preview(control, preview_url, title).await;
    }

    /// The transport bar's play/pause toggle was clicked.
    pub async fn transport_toggled(&mut self) {
        self.player.toggle_transport().await;
    }

    /// The active preview reached its natural end.
    pub fn preview_ended(&mut self) {
        self.player.note_ended();
    }

    /// Periodic playback progress notification.
    pub fn progress_tick(&self) {
        self.player.tick();
    }

    /// The progress track was pressed at `offset` within a track of
    /// `width`.
    pub fn seek_requested(&mut self, offset: f64, width: f64) {
        self.player.seek_to_fraction(offset, width);
    }

    /// A buy control was clicked for a license.
    pub fn buy_clicked(&mut self, intent: PurchaseIntent) {
        self.checkout.open(intent);
    }

    /// The payment widget asked for an order.
    pub async fn order_requested(&self) -> Result<OrderId> {
        self.checkout.create_order().await
    }

    /// The buyer approved an order in the widget.
    pub async fn payment_approved(&mut self, order: &OrderId) {
        self.checkout.handle_approval(order).await;
    }

    /// The purchase modal's close control was clicked.
    pub fn modal_closed(&mut self) {
        self.checkout.close();
    }

    /// Whether checkout has a configured payment provider.
    pub fn payment_available(&self) -> bool {
        self.checkout.provider_available()
    }

    /// Visual configuration the host passes to the payment widget.
    pub fn widget_style(&self) -> &WidgetStyle {
        self.checkout.widget_style()
    }
}
