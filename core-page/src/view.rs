//! Catalog-to-view-model mapping.
//!
//! Pure functions from catalog records to render-ready fields. Keeping this
//! step free of markup and document access makes the mapping testable on
//! its own; the [`html`](crate::html) module consumes the results.

use core_catalog::{Artist, Beat, License};

/// Format a price as a dollar label with two decimals.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// One social link in the artist header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinkView {
    pub platform: String,
    pub url: String,
}

/// Render-ready artist header.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistHeaderView {
    pub name: String,
    pub discipline: String,
    pub bio: String,
    /// Empty when the artist has no social links; the renderer then omits
    /// the social section entirely.
    pub socials: Vec<SocialLinkView>,
}

impl ArtistHeaderView {
    pub fn from_artist(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            discipline: artist.discipline.clone(),
            bio: artist.bio.clone(),
            socials: artist
                .socials
                .iter()
                .map(|(platform, url)| SocialLinkView {
                    platform: platform.clone(),
                    url: url.clone(),
                })
                .collect(),
        }
    }
}

/// One license row on a beat card, carrying everything the checkout needs
/// so it stays stateless with respect to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseRowView {
    pub name: String,
    pub details: String,
    pub price: f64,
    pub price_label: String,
    /// Purchase description submitted to the payment widget.
    pub order_description: String,
    pub download_url: String,
}

/// Render-ready beat card.
#[derive(Debug, Clone, PartialEq)]
pub struct BeatCardView {
    pub beat_id: String,
    pub title: String,
    /// First character of the title, shown on the cover placeholder.
    pub cover_initial: String,
    pub genre: String,
    pub bpm_label: String,
    pub key: String,
    pub description: String,
    pub tags: Vec<String>,
    pub preview_url: String,
    pub licenses: Vec<LicenseRowView>,
}

impl BeatCardView {
    pub fn from_beat(beat: &Beat) -> Self {
        Self {
            beat_id: beat.id.clone(),
            title: beat.title.clone(),
            cover_initial: beat.title.chars().take(1).collect(),
            genre: beat.genre.clone(),
            bpm_label: format!("{} BPM", beat.bpm),
            key: beat.key.clone(),
            description: beat.description.clone(),
            tags: beat.tags.clone(),
            preview_url: beat.preview_url.clone(),
            licenses: beat
                .licenses
                .iter()
                .map(|license| LicenseRowView::from_license(&beat.title, license))
                .collect(),
        }
    }
}

impl LicenseRowView {
    fn from_license(beat_title: &str, license: &License) -> Self {
        Self {
            name: license.name.clone(),
            details: license.details.clone(),
            price: license.price,
            price_label: format_price(license.price),
            order_description: format!("{} — {}", beat_title, license.name),
            download_url: license.download_url.clone(),
        }
    }
}
