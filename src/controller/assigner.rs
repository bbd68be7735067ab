//! Playlist assignment: pick a track, confirm a playlist, flash "added"

use std::sync::Arc;
use std::time::Duration;

use crate::model::{CatalogClient, SearchResult, SharedState};
use crate::timer::{CancellableTimer, Scheduler};

pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(2000);

#[derive(Clone)]
pub struct PlaylistAssigner {
    client: Arc<dyn CatalogClient>,
    state: SharedState,
    highlight_timer: Arc<CancellableTimer>,
}

impl PlaylistAssigner {
    pub fn new(client: Arc<dyn CatalogClient>, state: SharedState, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            client,
            state,
            highlight_timer: Arc::new(CancellableTimer::new(scheduler, HIGHLIGHT_DURATION)),
        }
    }

    /// Load the playlist catalog. On failure the catalog is left empty.
    pub async fn load_playlists(&self) {
        let response = self.client.list_playlists().await;
        let mut state = self.state.lock().await;
        match response {
            Ok(playlists) => {
                tracing::info!(count = playlists.len(), "Loaded playlists");
                state.assignment.playlists = playlists;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load playlists");
                state.assignment.playlists.clear();
            }
        }
    }

    pub async fn open(&self, track: SearchResult) {
        tracing::debug!(track_id = %track.id, "Opening playlist picker");
        self.state.lock().await.assignment.pending = Some(track);
    }

    pub async fn cancel(&self) {
        if self.state.lock().await.assignment.pending.take().is_some() {
            tracing::debug!("Playlist picker cancelled");
        }
    }

    /// Assign the pending track to `playlist`.
    ///
    /// The picker closes before the request is sent. Returns whether the
    /// assignment went through; failures are logged, never raised.
    pub async fn confirm(&self, playlist: &str) -> bool {
        let Some(track) = self.state.lock().await.assignment.pending.take() else {
            tracing::debug!(playlist, "Confirm without a pending selection");
            return false;
        };

        match self.client.assign(&track.id, playlist).await {
            Ok(()) => {
                tracing::info!(track_id = %track.id, playlist, "Track added to playlist");
                self.raise_highlight(track).await;
                true
            }
            Err(e) => {
                tracing::warn!(track_id = %track.id, playlist, error = %e, "Failed to add track to playlist");
                false
            }
        }
    }

    async fn raise_highlight(&self, track: SearchResult) {
        // The expiry is registered before the state is released, so the live
        // timer always carries the current generation.
        let mut state = self.state.lock().await;
        state.assignment.highlight_generation += 1;
        state.assignment.highlighted = Some(track.id);
        let generation = state.assignment.highlight_generation;

        let shared = self.state.clone();
        self.highlight_timer
            .schedule(async move {
                let mut state = shared.lock().await;
                // A newer highlight owns the field now.
                if state.assignment.highlight_generation == generation {
                    state.assignment.highlighted = None;
                }
            })
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex as StdMutex;

    use crate::model::catalog_client::testing::{track, MockCatalog};
    use crate::model::{Playlist, SearchState, TrackId};
    use crate::timer::{ScheduledTask, TimerTask, TokioScheduler};

    /// Holds scheduled tasks until the test runs them, noting whether the
    /// search state was locked at the moment each one was registered.
    struct RecordingScheduler {
        state: SharedState,
        state_locked: StdMutex<Vec<bool>>,
        tasks: StdMutex<Vec<(TimerTask, Arc<AtomicBool>)>>,
    }

    impl RecordingScheduler {
        fn new(state: SharedState) -> Self {
            Self {
                state,
                state_locked: StdMutex::new(Vec::new()),
                tasks: StdMutex::new(Vec::new()),
            }
        }

        fn uncancelled(&self) -> Vec<TimerTask> {
            self.tasks
                .lock()
                .unwrap()
                .drain(..)
                .filter(|(_, cancelled)| !cancelled.load(Ordering::SeqCst))
                .map(|(task, _)| task)
                .collect()
        }
    }

    impl Scheduler for RecordingScheduler {
        fn schedule(&self, _delay: Duration, task: TimerTask) -> ScheduledTask {
            self.state_locked.lock().unwrap().push(self.state.try_lock().is_err());
            let cancelled = Arc::new(AtomicBool::new(false));
            self.tasks.lock().unwrap().push((task, cancelled.clone()));
            ScheduledTask::new(move || cancelled.store(true, Ordering::SeqCst))
        }
    }

    fn assigner_with(mock: MockCatalog) -> (PlaylistAssigner, Arc<MockCatalog>, SharedState) {
        let mock = Arc::new(mock);
        let state = SearchState::shared();
        let assigner = PlaylistAssigner::new(mock.clone(), state.clone(), Arc::new(TokioScheduler));
        (assigner, mock, state)
    }

    async fn highlighted(state: &SharedState) -> Option<TrackId> {
        state.lock().await.view().highlighted_id
    }

    #[tokio::test]
    async fn loads_playlist_catalog() {
        let (assigner, mock, state) = assigner_with(MockCatalog::new().with_playlists(&["Favorites", "Chill"]));
        assigner.load_playlists().await;

        assert_eq!(mock.playlist_calls(), 1);
        assert_eq!(
            state.lock().await.view().playlists,
            vec![Playlist::new("Favorites"), Playlist::new("Chill")]
        );
    }

    #[tokio::test]
    async fn playlist_failure_leaves_catalog_empty() {
        let (assigner, _mock, state) = assigner_with(MockCatalog::new());
        assigner.load_playlists().await;
        assert!(state.lock().await.view().playlists.is_empty());
    }

    #[tokio::test]
    async fn cancel_clears_selection_without_network() {
        let (assigner, mock, state) = assigner_with(MockCatalog::new());
        assigner.open(track(3, "Lullaby")).await;
        assert_eq!(state.lock().await.view().pending_selection, Some(track(3, "Lullaby")));

        assigner.cancel().await;
        assert_eq!(state.lock().await.view().pending_selection, None);
        assert!(mock.assign_calls().is_empty());
    }

    #[tokio::test]
    async fn confirm_without_selection_is_noop() {
        let (assigner, mock, _state) = assigner_with(MockCatalog::new());
        assert!(!assigner.confirm("Favorites").await);
        assert!(mock.assign_calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn highlight_lasts_exactly_two_seconds() {
        let (assigner, mock, state) = assigner_with(MockCatalog::new());
        assigner.open(track(7, "Hungarian Dance No. 5")).await;

        assert!(assigner.confirm("Favorites").await);
        assert_eq!(mock.assign_calls(), vec![(TrackId::from(7), "Favorites".to_string())]);
        assert_eq!(state.lock().await.view().pending_selection, None);
        assert_eq!(highlighted(&state).await, Some(TrackId::from(7)));

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(highlighted(&state).await, Some(TrackId::from(7)));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(highlighted(&state).await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_assignment_closes_picker_without_highlight() {
        let (assigner, mock, state) = assigner_with(MockCatalog::new().failing_assign());
        assigner.open(track(7, "Hungarian Dance No. 5")).await;

        assert!(!assigner.confirm("Favorites").await);
        assert_eq!(mock.assign_calls().len(), 1);

        let view = state.lock().await.view();
        assert_eq!(view.pending_selection, None);
        assert_eq!(view.highlighted_id, None);
    }

    #[tokio::test(start_paused = true)]
    async fn later_assignment_replaces_highlight_and_timer() {
        let (assigner, _mock, state) = assigner_with(MockCatalog::new());

        assigner.open(track(1, "First")).await;
        assigner.confirm("Favorites").await;
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assigner.open(track(2, "Second")).await;
        assigner.confirm("Chill").await;
        assert_eq!(highlighted(&state).await, Some(TrackId::from(2)));

        // Past the first track's deadline: the second highlight survives.
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(highlighted(&state).await, Some(TrackId::from(2)));

        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert_eq!(highlighted(&state).await, None);
    }

    #[tokio::test]
    async fn expiry_is_registered_under_the_highlight_it_clears() {
        let mock = Arc::new(MockCatalog::new());
        let state = SearchState::shared();
        let scheduler = Arc::new(RecordingScheduler::new(state.clone()));
        let assigner = PlaylistAssigner::new(mock, state.clone(), scheduler.clone());

        assigner.open(track(1, "First")).await;
        assert!(assigner.confirm("Favorites").await);
        assigner.open(track(2, "Second")).await;
        assert!(assigner.confirm("Chill").await);

        assert_eq!(*scheduler.state_locked.lock().unwrap(), vec![true, true]);
        assert_eq!(highlighted(&state).await, Some(TrackId::from(2)));

        // Only the second expiry survives, and it clears the second highlight.
        let live = scheduler.uncancelled();
        assert_eq!(live.len(), 1);
        for task in live {
            task.await;
        }
        assert_eq!(highlighted(&state).await, None);
    }
}
