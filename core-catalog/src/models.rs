//! Domain models for the artist catalog.
//!
//! The catalog arrives as one JSON document with camelCase field names
//! (`previewUrl`, `downloadUrl`). Optional collections default to empty so
//! a sparse artist record still deserializes; the renderer turns the empty
//! collections into explicit empty states.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The whole catalog document: `{ "artists": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub artists: Vec<Artist>,
}

impl Catalog {
    /// Look up one artist by identifier.
    pub fn artist_by_id(&self, id: &str) -> Option<&Artist> {
        self.artists.iter().find(|artist| artist.id == id)
    }
}

/// One artist and their storefront content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// Identifier matched against the page's `id` query parameter.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Discipline label, e.g. "Producer".
    pub discipline: String,
    /// Biography text.
    pub bio: String,
    /// Social platform name → profile URL.
    #[serde(default)]
    pub socials: BTreeMap<String, String>,
    /// Beats offered for sale, in display order.
    #[serde(default)]
    pub beats: Vec<Beat>,
}

/// One purchasable beat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beat {
    pub id: String,
    pub title: String,
    pub genre: String,
    /// Tempo in beats per minute.
    pub bpm: u32,
    /// Musical key, e.g. "F min".
    pub key: String,
    pub description: String,
    /// URL of the short preview sample (distinct from the purchasable file).
    pub preview_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Purchase options, in display order.
    #[serde(default)]
    pub licenses: Vec<License>,
}

/// One purchase option for a beat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub name: String,
    /// Usage terms, shown under the name.
    pub details: String,
    pub price: f64,
    /// Target the buyer receives after a successful capture.
    pub download_url: String,
}
