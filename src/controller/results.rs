//! Paginated result store: page-1 replace, page-N append, stale-response guard

use std::sync::Arc;

use crate::model::{CatalogClient, SharedState};

#[derive(Clone)]
pub struct PaginatedResultStore {
    client: Arc<dyn CatalogClient>,
    state: SharedState,
}

impl PaginatedResultStore {
    pub fn new(client: Arc<dyn CatalogClient>, state: SharedState) -> Self {
        Self { client, state }
    }

    /// Start a fresh search at page 1.
    ///
    /// An empty query clears the results without touching the network. Any
    /// fetch still in flight becomes stale either way.
    pub async fn begin_search(&self, query: &str) {
        let token = {
            let mut state = self.state.lock().await;
            let results = &mut state.results;
            results.latest_token += 1;
            results.query = query.to_string();
            results.page = 1;
            if query.is_empty() {
                results.items.clear();
                results.is_loading = false;
                tracing::debug!("Empty query, cleared results");
                return;
            }
            results.is_loading = true;
            results.has_searched = true;
            results.latest_token
        };

        tracing::debug!(query, token, "Performing search");
        let response = self.client.search(query, 1).await;

        let mut state = self.state.lock().await;
        let results = &mut state.results;
        if token != results.latest_token {
            tracing::debug!(query, token, latest = results.latest_token, "Discarding stale search response");
            return;
        }
        results.is_loading = false;
        match response {
            Ok(page) => {
                tracing::info!(query, count = page.len(), "Search completed successfully");
                results.items = page;
            }
            Err(e) => {
                tracing::warn!(query, error = %e, "Search failed");
                results.items.clear();
            }
        }
    }

    /// Fetch the page after the cursor and append it.
    ///
    /// Returns `false` without doing anything while a fetch is in flight or
    /// when there is no active query.
    pub async fn load_more(&self) -> bool {
        let (token, query, next_page) = {
            let mut state = self.state.lock().await;
            let results = &mut state.results;
            if results.is_loading || results.query.is_empty() {
                tracing::debug!(loading = results.is_loading, "Ignoring load more");
                return false;
            }
            results.latest_token += 1;
            results.is_loading = true;
            (results.latest_token, results.query.clone(), results.page + 1)
        };

        tracing::debug!(query, page = next_page, "Loading more results");
        let response = self.client.search(&query, next_page).await;

        let mut state = self.state.lock().await;
        let results = &mut state.results;
        if token != results.latest_token {
            tracing::debug!(query, page = next_page, "Discarding stale page response");
            return true;
        }
        results.is_loading = false;
        match response {
            Ok(mut page) => {
                tracing::info!(query, page = next_page, loaded = page.len(), "Loaded more results");
                results.items.append(&mut page);
                results.page = next_page;
            }
            Err(e) => {
                tracing::warn!(query, page = next_page, error = %e, "Failed to load more results");
            }
        }
        true
    }
}
