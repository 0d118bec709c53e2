//! Markup construction.
//!
//! Builds the page fragments from view models. Interactive elements carry
//! `data-` attributes with everything the player and checkout need, so
//! those components never reach back into the catalog. All catalog text is
//! escaped before interpolation.

use crate::view::{ArtistHeaderView, BeatCardView};
use bridge_traits::Glyph;

/// Page-level message when the query string names no artist.
pub const MSG_NO_ARTIST: &str = "No artist specified.";
/// Page-level message when the catalog has no matching artist.
pub const MSG_NOT_FOUND: &str = "Artist not found.";
/// Page-level message when the catalog document cannot be loaded.
pub const MSG_LOAD_FAILED: &str = "Failed to load artist data.";

/// Escape text for interpolation into element content or a double-quoted
/// attribute value.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Page-level error paragraph with a return-home link.
pub fn render_error(message: &str) -> String {
    format!(
        r#"<p class="error-message">{} <a href="index.html">Return home</a></p>"#,
        escape(message)
    )
}

/// The artist hero header.
pub fn render_header(header: &ArtistHeaderView) -> String {
    let socials: String = header
        .socials
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener" class="social-link">{}</a>"#,
                escape(&link.url),
                escape(&link.platform)
            )
        })
        .collect();

    let socials_section = if socials.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="artist-socials">{socials}</div>"#)
    };

    format!(
        r#"<div class="artist-hero"><h1>{}</h1><div class="artist-discipline">{}</div><p class="artist-bio">{}</p>{}</div>"#,
        escape(&header.name),
        escape(&header.discipline),
        escape(&header.bio),
        socials_section
    )
}

/// The beats grid, or the explicit empty state when there are no beats.
pub fn render_grid(cards: &[BeatCardView]) -> String {
    if cards.is_empty() {
        return r#"<p class="no-beats">No beats available yet. Check back soon.</p>"#
            .to_string();
    }
    cards.iter().map(render_card).collect()
}

fn render_card(card: &BeatCardView) -> String {
    let tags: String = card
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape(tag)))
        .collect();

    let licenses: String = card
        .licenses
        .iter()
        .enumerate()
        .map(|(index, row)| {
            format!(
                r#"<div class="license-row"><div class="license-info"><div class="license-name">{name}</div><div class="license-details">{details}</div></div><div class="license-price">{price_label}</div><button class="buy-btn" data-beat-id="{beat_id}" data-license-index="{index}" data-price="{price}" data-name="{order}" data-download="{download}">Buy</button></div>"#,
                name = escape(&row.name),
                details = escape(&row.details),
                price_label = escape(&row.price_label),
                beat_id = escape(&card.beat_id),
                index = index,
                price = row.price,
                order = escape(&row.order_description),
                download = escape(&row.download_url),
            )
        })
        .collect();

    format!(
        r#"<div class="beat-card" data-beat-id="{beat_id}"><div class="beat-card-top"><div class="beat-cover"><div class="beat-cover-placeholder">{initial}</div><button class="play-btn" data-preview="{preview}" data-title="{title}" aria-label="Play preview"><span class="play-icon">{play_glyph}</span></button></div><div class="beat-info"><h3 class="beat-title">{title}</h3><div class="beat-meta"><span class="beat-genre">{genre}</span><span class="beat-bpm">{bpm}</span><span class="beat-key">{key}</span></div><p class="beat-description">{description}</p><div class="beat-tags">{tags}</div></div></div><div class="beat-licenses"><div class="license-header">License Options</div>{licenses}</div></div>"#,
        beat_id = escape(&card.beat_id),
        initial = escape(&card.cover_initial),
        preview = escape(&card.preview_url),
        title = escape(&card.title),
        play_glyph = Glyph::Play.as_entity(),
        genre = escape(&card.genre),
        bpm = escape(&card.bpm_label),
        key = escape(&card.key),
        description = escape(&card.description),
        tags = tags,
        licenses = licenses,
    )
}

/// Placeholder shown in the widget container when no payment provider is
/// configured.
pub fn render_payment_placeholder() -> String {
    r#"<div class="paypal-placeholder">PayPal is not configured yet. Set your Client ID to enable purchases.</div>"#
        .to_string()
}

/// Message replacing the widget after a successful capture.
pub fn render_payment_success() -> String {
    r#"<div class="payment-success">Payment successful! Thank you.</div>"#.to_string()
}

/// Message replacing the widget after a failed capture.
pub fn render_payment_error() -> String {
    r#"<div class="payment-error">Payment failed. Please try again.</div>"#.to_string()
}
