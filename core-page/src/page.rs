//! Page load: identity, fetch, render.
//!
//! One load per page view. Every failure mode maps to a distinct page-level
//! message painted into the content region; the outcome enum exists so
//! hosts and tests can tell which path was taken without scraping markup.

use crate::html;
use crate::view::{ArtistHeaderView, BeatCardView};
use bridge_traits::{PageSurface, Region};
use core_catalog::{artist_id_from_query, CatalogSource};
use std::sync::Arc;
use tracing::{info, warn};

/// What a page load ended up showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Header and grid rendered for a matching artist.
    Rendered,
    /// The query string carried no artist id; nothing was fetched.
    MissingArtistId,
    /// The catalog loaded but named no such artist.
    NotFound,
    /// The catalog document could not be fetched or parsed.
    LoadFailed,
}

/// Renders one artist's storefront page.
pub struct ArtistPage {
    surface: Arc<dyn PageSurface>,
    source: CatalogSource,
}

impl ArtistPage {
    pub fn new(surface: Arc<dyn PageSurface>, source: CatalogSource) -> Self {
        Self { surface, source }
    }

    /// Resolve the artist from the query string, load the catalog, and
    /// render the page.
    pub async fn load(&self, query: &str) -> LoadOutcome {
        let artist_id = match artist_id_from_query(query) {
            Some(id) => id,
            None => {
                self.surface
                    .set_region_html(Region::Content, &html::render_error(html::MSG_NO_ARTIST));
                return LoadOutcome::MissingArtistId;
            }
        };

        let catalog = match self.source.load().await {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(artist = %artist_id, error = %err, "catalog load failed");
                self.surface
                    .set_region_html(Region::Content, &html::render_error(html::MSG_LOAD_FAILED));
                return LoadOutcome::LoadFailed;
            }
        };

        let artist = match catalog.artist_by_id(&artist_id) {
            Some(artist) => artist,
            None => {
                self.surface
                    .set_region_html(Region::Content, &html::render_error(html::MSG_NOT_FOUND));
                return LoadOutcome::NotFound;
            }
        };

        let header = ArtistHeaderView::from_artist(artist);
        let cards: Vec<BeatCardView> =
            artist.beats.iter().map(BeatCardView::from_beat).collect();

        self.surface
            .set_region_html(Region::Header, &html::render_header(&header));
        self.surface
            .set_region_html(Region::Grid, &html::render_grid(&cards));
        info!(artist = %artist_id, beats = cards.len(), "page rendered");
        LoadOutcome::Rendered
    }
}
