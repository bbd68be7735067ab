//! The single state record behind the search screen
//!
//! Every field the screen shows lives in [`SearchState`]. Components share it
//! through [`SharedState`] and each one only touches its own section:
//! the result store owns `results`, the assigner owns `assignment`, and the
//! controller owns the query text.

use std::sync::Arc;
use tokio::sync::Mutex;

use super::types::{Playlist, SearchResult, TrackId};

pub type SharedState = Arc<Mutex<SearchState>>;

/// Result set and page cursor for the most recently dispatched query
#[derive(Clone, Debug, Default)]
pub struct ResultState {
    pub(crate) query: String,
    pub(crate) items: Vec<SearchResult>,
    pub(crate) page: u32,
    pub(crate) is_loading: bool,
    /// Token of the most recently issued fetch; older responses are stale.
    pub(crate) latest_token: u64,
    /// Set once a non-empty query has been sent; never reset.
    pub(crate) has_searched: bool,
}

impl ResultState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn items(&self) -> &[SearchResult] {
        &self.items
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }
}

#[derive(Clone, Debug, Default)]
pub struct AssignmentState {
    pub(crate) playlists: Vec<Playlist>,
    pub(crate) pending: Option<SearchResult>,
    pub(crate) highlighted: Option<TrackId>,
    pub(crate) highlight_generation: u64,
}

#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub(crate) query_text: String,
    pub(crate) has_typed_non_empty: bool,
    pub(crate) results: ResultState,
    pub(crate) assignment: AssignmentState,
}

impl SearchState {
    pub fn shared() -> SharedState {
        Arc::new(Mutex::new(Self::default()))
    }

    pub fn results(&self) -> &ResultState {
        &self.results
    }

    pub fn view(&self) -> ViewState {
        let results = self.results.items.clone();
        let is_loading = self.results.is_loading;
        ViewState {
            query_text: self.query_text.clone(),
            can_load_more: !results.is_empty() && !is_loading,
            results,
            is_loading,
            has_typed_non_empty: self.has_typed_non_empty,
            has_searched: self.results.has_searched,
            pending_selection: self.assignment.pending.clone(),
            highlighted_id: self.assignment.highlighted.clone(),
            playlists: self.assignment.playlists.clone(),
        }
    }
}

/// Snapshot handed to the rendering surface
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub query_text: String,
    pub results: Vec<SearchResult>,
    pub is_loading: bool,
    pub has_typed_non_empty: bool,
    pub has_searched: bool,
    pub can_load_more: bool,
    pub pending_selection: Option<SearchResult>,
    pub highlighted_id: Option<TrackId>,
    pub playlists: Vec<Playlist>,
}

impl ViewState {
    /// "No results found" is only meaningful once a search has gone out.
    /// Keystrokes still inside the debounce window do not count.
    pub fn shows_no_results(&self) -> bool {
        self.has_typed_non_empty && self.has_searched && !self.is_loading && self.results.is_empty()
    }

    pub fn is_highlighted(&self, track: &SearchResult) -> bool {
        self.highlighted_id.as_ref() == Some(&track.id)
    }
}
