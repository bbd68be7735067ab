//! Controller module - search screen logic and event handling
//!
//! The controller owns the state record and wires user input to the
//! components that mutate it:
//!
//! - `debounce`: coalesces query edits into a single dispatch
//! - `results`: paginated result store
//! - `assigner`: playlist picker and "added" highlight
//! - `input`: key event handling for the terminal surface

mod assigner;
mod debounce;
mod input;
mod results;

pub use assigner::{PlaylistAssigner, HIGHLIGHT_DURATION};
pub use debounce::{Dispatch, QueryDebouncer, DEBOUNCE_INTERVAL};
pub use results::PaginatedResultStore;

use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::Mutex;

use crate::model::{CatalogClient, SearchResult, SearchState, SharedState, UiState, ViewState};
use crate::timer::{Scheduler, TokioScheduler};

#[derive(Clone)]
pub struct SearchController {
    state: SharedState,
    store: PaginatedResultStore,
    assigner: PlaylistAssigner,
    debouncer: Arc<QueryDebouncer>,
    pub(crate) ui_state: Arc<Mutex<UiState>>,
}

impl SearchController {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self::with_scheduler(client, Arc::new(TokioScheduler))
    }

    pub fn with_scheduler(client: Arc<dyn CatalogClient>, scheduler: Arc<dyn Scheduler>) -> Self {
        let state = SearchState::shared();
        let store = PaginatedResultStore::new(client.clone(), state.clone());
        let assigner = PlaylistAssigner::new(client, state.clone(), scheduler.clone());

        let search_store = store.clone();
        let dispatch: Dispatch = Arc::new(move |query: String| {
            let store = search_store.clone();
            async move { store.begin_search(&query).await }.boxed()
        });

        Self {
            state,
            store,
            assigner,
            debouncer: Arc::new(QueryDebouncer::new(scheduler, dispatch)),
            ui_state: Arc::new(Mutex::new(UiState::default())),
        }
    }

    /// Load the playlist catalog. Called once per controller.
    pub async fn initialize(&self) {
        tracing::debug!("Initializing search controller");
        self.assigner.load_playlists().await;
    }

    /// Record new query text and hand it to the debouncer.
    pub async fn set_query(&self, text: String) {
        {
            let mut state = self.state.lock().await;
            if !text.is_empty() {
                state.has_typed_non_empty = true;
            }
            state.query_text = text.clone();
        }
        self.ui_state.lock().await.result_selected = 0;
        self.debouncer.submit(&text).await;
    }

    pub async fn load_more(&self) -> bool {
        self.store.load_more().await
    }

    pub async fn open_assignment(&self, track: SearchResult) {
        self.ui_state.lock().await.playlist_selected = 0;
        self.assigner.open(track).await;
    }

    pub async fn cancel_assignment(&self) {
        self.assigner.cancel().await;
    }

    pub async fn confirm_assignment(&self, playlist: &str) -> bool {
        self.assigner.confirm(playlist).await
    }

    pub async fn view_state(&self) -> ViewState {
        self.state.lock().await.view()
    }

    pub async fn ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn should_quit(&self) -> bool {
        self.ui_state.lock().await.should_quit
    }
}
