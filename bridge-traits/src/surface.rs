//! Page surface bridge trait.
//!
//! The markup defines fixed regions (page content, artist header, beats
//! grid, transport bar, purchase modal); this trait is that contract
//! expressed as a capability so the core can be exercised against a
//! recording fake instead of a real document tree.
//!
//! All mutations are synchronous, matching document mutation in the host.

use crate::platform::PlatformSendSync;
use std::fmt;

/// Fixed page regions that accept rendered HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Whole-page content area, used for page-level error messages.
    Content,
    /// Artist hero header.
    Header,
    /// Grid of beat cards.
    Grid,
    /// Container the payment widget renders into, inside the modal.
    PaymentWidget,
}

/// Identifier of one per-beat play control.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControlId(pub String);

impl ControlId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Icon shown on a play control or the transport-bar toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Play,
    Pause,
}

impl Glyph {
    /// HTML entity rendition used by the page markup.
    pub fn as_entity(&self) -> &'static str {
        match self {
            Glyph::Play => "&#9654;",
            Glyph::Pause => "&#9646;&#9646;",
        }
    }
}

/// Trait for the rendered page the core mutates.
///
/// Hosts map each method onto the corresponding fixed element; tests record
/// the calls. Methods take `&self` because the host document is shared;
/// implementations use interior mutability where they keep state.
pub trait PageSurface: PlatformSendSync {
    /// Replace the HTML of a fixed region.
    fn set_region_html(&self, region: Region, html: &str);

    /// Set the glyph of one per-beat play control.
    fn set_control_glyph(&self, control: &ControlId, glyph: Glyph);

    /// Show the transport bar (if hidden) and set its track title.
    fn set_transport_track(&self, title: &str);

    /// Set the transport bar's play/pause glyph.
    fn set_transport_glyph(&self, glyph: Glyph);

    /// Update the transport progress indicator: fill percentage plus
    /// formatted elapsed and total timestamps.
    fn set_progress(&self, percent: f64, elapsed: &str, total: &str);

    /// Populate the purchase modal's item title and price label.
    fn set_modal_item(&self, title: &str, price_label: &str);

    /// Reveal the purchase modal.
    fn show_modal(&self);

    /// Hide the purchase modal.
    fn hide_modal(&self);

    /// Reveal the download section with a link target and label.
    fn show_download(&self, href: &str, label: &str);

    /// Hide the download section.
    fn hide_download(&self);
}
