//! Brahms - search a music catalog and file tracks into playlists
//!
//! Typing drives a debounced, paginated search against the catalog service;
//! any result can be added to a playlist through a small picker that flashes
//! an "added" marker on success.

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod timer;
pub mod view;

pub use config::Config;
pub use controller::SearchController;
pub use error::NetworkError;
