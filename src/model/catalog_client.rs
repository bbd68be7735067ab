//! Catalog service client
//!
//! [`CatalogClient`] is the network boundary: search, list playlists, add a
//! track to a playlist. Each call is a single attempt with no retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;

use crate::error::NetworkError;
use super::types::{Playlist, ResultPage, TrackId};

const SEARCH_ENDPOINT: &str = "/api/search";
const PLAYLISTS_ENDPOINT: &str = "/api/playlists";
const ADD_TO_PLAYLIST_ENDPOINT: &str = "/api/add_to_playlist";

#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch one page of results. Pages are 1-based.
    async fn search(&self, query: &str, page: u32) -> Result<ResultPage, NetworkError>;

    async fn list_playlists(&self) -> Result<Vec<Playlist>, NetworkError>;

    async fn assign(&self, track_id: &TrackId, playlist: &str) -> Result<(), NetworkError>;
}

#[derive(Serialize)]
struct AddToPlaylistRequest<'a> {
    #[serde(rename = "trackId")]
    track_id: &'a TrackId,
    playlist: &'a str,
}

/// HTTP client for the catalog service
#[derive(Clone)]
pub struct HttpCatalogClient {
    http: Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, NetworkError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn check_status(response: Response, endpoint: &'static str) -> Result<Response, NetworkError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(NetworkError::Status { endpoint, status })
        }
    }

    async fn fetch_page(&self, query: &str, page: u32) -> Result<ResultPage, NetworkError> {
        let response = self
            .http
            .get(self.url(SEARCH_ENDPOINT))
            .query(&[("query", query.to_string()), ("page", page.to_string())])
            .send()
            .await?;
        let results = Self::check_status(response, SEARCH_ENDPOINT)?
            .json::<ResultPage>()
            .await?;
        Ok(results)
    }

    async fn fetch_playlists(&self) -> Result<Vec<Playlist>, NetworkError> {
        let response = self.http.get(self.url(PLAYLISTS_ENDPOINT)).send().await?;
        let playlists = Self::check_status(response, PLAYLISTS_ENDPOINT)?
            .json::<Vec<Playlist>>()
            .await?;
        Ok(playlists)
    }

    async fn post_assignment(&self, track_id: &TrackId, playlist: &str) -> Result<(), NetworkError> {
        let response = self
            .http
            .post(self.url(ADD_TO_PLAYLIST_ENDPOINT))
            .json(&AddToPlaylistRequest { track_id, playlist })
            .send()
            .await?;
        Self::check_status(response, ADD_TO_PLAYLIST_ENDPOINT)?;
        Ok(())
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn search(&self, query: &str, page: u32) -> Result<ResultPage, NetworkError> {
        debug_assert!(page >= 1, "pages are 1-based");
        crate::log_api_request!("search", query, page);
        let result = self.fetch_page(query, page).await;
        crate::log_api_result!("search", result);
        if let Ok(ref results) = result {
            tracing::debug!(query, page, count = results.len(), "Received result page");
        }
        result
    }

    async fn list_playlists(&self) -> Result<Vec<Playlist>, NetworkError> {
        crate::log_api_request!("list_playlists");
        let result = self.fetch_playlists().await;
        crate::log_api_result!("list_playlists", result);
        result
    }

    async fn assign(&self, track_id: &TrackId, playlist: &str) -> Result<(), NetworkError> {
        crate::log_api_request!("assign", track_id = %track_id, playlist);
        let result = self.post_assignment(track_id, playlist).await;
        crate::log_api_result!("assign", result);
        result
    }
}

/// Scripted in-memory catalog for exercising the controller without a server
#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use reqwest::StatusCode;

    use crate::error::NetworkError;
    use crate::model::{Playlist, ResultPage, SearchResult, TrackId};
    use super::CatalogClient;

    pub(crate) fn track(id: i64, title: &str) -> SearchResult {
        SearchResult {
            id: TrackId::from(id),
            title: title.to_string(),
            artist: "Johann Sebastian Bach".to_string(),
            album: "Collected Works".to_string(),
            cover_art: None,
        }
    }

    pub(crate) fn tracks(range: std::ops::Range<i64>) -> ResultPage {
        range.map(|id| track(id, &format!("Track {}", id))).collect()
    }

    fn failure(endpoint: &'static str) -> NetworkError {
        NetworkError::Status {
            endpoint,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[derive(Default)]
    pub(crate) struct MockCatalog {
        pages: Mutex<HashMap<(String, u32), ResultPage>>,
        failing_pages: Mutex<Vec<(String, u32)>>,
        latency: Mutex<HashMap<String, Duration>>,
        playlists: Mutex<Option<Vec<Playlist>>>,
        fail_assign: Mutex<bool>,
        search_calls: Mutex<Vec<(String, u32)>>,
        assign_calls: Mutex<Vec<(TrackId, String)>>,
        playlist_calls: Mutex<usize>,
    }

    impl MockCatalog {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn with_page(self, query: &str, page: u32, results: ResultPage) -> Self {
            self.pages.lock().unwrap().insert((query.to_string(), page), results);
            self
        }

        pub(crate) fn with_failing_page(self, query: &str, page: u32) -> Self {
            self.failing_pages.lock().unwrap().push((query.to_string(), page));
            self
        }

        pub(crate) fn with_latency(self, query: &str, latency: Duration) -> Self {
            self.latency.lock().unwrap().insert(query.to_string(), latency);
            self
        }

        /// Without playlists configured, listing them fails.
        pub(crate) fn with_playlists(self, names: &[&str]) -> Self {
            *self.playlists.lock().unwrap() = Some(names.iter().map(|name| Playlist::new(*name)).collect());
            self
        }

        pub(crate) fn failing_assign(self) -> Self {
            *self.fail_assign.lock().unwrap() = true;
            self
        }

        pub(crate) fn search_calls(&self) -> Vec<(String, u32)> {
            self.search_calls.lock().unwrap().clone()
        }

        pub(crate) fn assign_calls(&self) -> Vec<(TrackId, String)> {
            self.assign_calls.lock().unwrap().clone()
        }

        pub(crate) fn playlist_calls(&self) -> usize {
            *self.playlist_calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl CatalogClient for MockCatalog {
        async fn search(&self, query: &str, page: u32) -> Result<ResultPage, NetworkError> {
            self.search_calls.lock().unwrap().push((query.to_string(), page));
            let latency = self.latency.lock().unwrap().get(query).copied();
            if let Some(latency) = latency {
                tokio::time::sleep(latency).await;
            }
            let key = (query.to_string(), page);
            if self.failing_pages.lock().unwrap().contains(&key) {
                return Err(failure("/api/search"));
            }
            Ok(self.pages.lock().unwrap().get(&key).cloned().unwrap_or_default())
        }

        async fn list_playlists(&self) -> Result<Vec<Playlist>, NetworkError> {
            *self.playlist_calls.lock().unwrap() += 1;
            self.playlists
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| failure("/api/playlists"))
        }

        async fn assign(&self, track_id: &TrackId, playlist: &str) -> Result<(), NetworkError> {
            self.assign_calls
                .lock()
                .unwrap()
                .push((track_id.clone(), playlist.to_string()));
            if *self.fail_assign.lock().unwrap() {
                Err(failure("/api/add_to_playlist"))
            } else {
                Ok(())
            }
        }
    }
}
