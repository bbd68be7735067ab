//! Model module - search state and catalog data
//!
//! - `types`: catalog data types and terminal UI state
//! - `app_model`: the search state record and its view snapshot
//! - `catalog_client`: the catalog service boundary

mod types;
mod app_model;
pub(crate) mod catalog_client;

pub use types::{Playlist, ResultPage, SearchResult, TrackId, UiState};

pub use app_model::{ResultState, SearchState, SharedState, ViewState};

pub use catalog_client::{CatalogClient, HttpCatalogClient};
