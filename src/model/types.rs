//! Core type definitions for catalog data and UI state

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque track identity as handed out by the catalog.
///
/// The catalog uses integer row ids, but any JSON string is accepted too and
/// echoed back unchanged when assigning.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackId::Numeric(id) => write!(f, "{}", id),
            TrackId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for TrackId {
    fn from(id: i64) -> Self {
        TrackId::Numeric(id)
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        TrackId::Text(id.to_string())
    }
}

/// A track from search results
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    pub id: TrackId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artist: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub album: String,
    /// Base64-encoded cover image; the catalog sends `""` for tracks without art.
    #[serde(default)]
    pub cover_art: Option<String>,
}

impl SearchResult {
    pub fn has_cover_art(&self) -> bool {
        self.cover_art.as_deref().is_some_and(|art| !art.is_empty())
    }

    /// Decoded cover image bytes. A payload that is present but not valid
    /// base64 still counts as art; decoding it yields `None`.
    pub fn cover_art_bytes(&self) -> Option<Vec<u8>> {
        if !self.has_cover_art() {
            return None;
        }
        let encoded = self.cover_art.as_deref()?;
        match STANDARD.decode(encoded) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::debug!(track_id = %self.id, error = %e, "Cover art is not valid base64");
                None
            }
        }
    }
}

/// One page of results for a (query, page) pair
pub type ResultPage = Vec<SearchResult>;

/// A playlist name from the catalog
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Playlist(String);

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cursor and popup state owned by the terminal surface
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub result_selected: usize,
    pub playlist_selected: usize,
    pub show_help_popup: bool,
    pub should_quit: bool,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
