//! Query debouncing

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;

use crate::timer::{CancellableTimer, Scheduler};

pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(300);

pub type Dispatch = Arc<dyn Fn(String) -> BoxFuture<'static, ()> + Send + Sync>;

/// Coalesces bursts of query changes into one dispatch of the last query.
pub struct QueryDebouncer {
    timer: CancellableTimer,
    dispatch: Dispatch,
}

impl QueryDebouncer {
    pub fn new(scheduler: Arc<dyn Scheduler>, dispatch: Dispatch) -> Self {
        Self {
            timer: CancellableTimer::new(scheduler, DEBOUNCE_INTERVAL),
            dispatch,
        }
    }

    /// Schedule `query` for dispatch once input has been quiet for the
    /// debounce interval, replacing anything scheduled earlier.
    ///
    /// An empty query skips the wait and is dispatched right away.
    pub async fn submit(&self, query: &str) {
        if query.is_empty() {
            self.timer.cancel().await;
            (self.dispatch)(String::new()).await;
            return;
        }

        tracing::trace!(query, "Debouncing query");
        let dispatch = self.dispatch.clone();
        let query = query.to_string();
        self.timer.schedule(async move { dispatch(query).await }).await;
    }
}
