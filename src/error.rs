//! Error types for the catalog boundary

use reqwest::StatusCode;
use thiserror::Error;

/// The only failure the remote catalog can report.
///
/// Every core operation catches this at its own boundary and falls back to
/// a safe default, so it never reaches the rendering surface.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{endpoint} responded with {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },
}
