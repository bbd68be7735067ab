//! Cancellable timers
//!
//! Scheduling goes through the [`Scheduler`] trait so the debounce and
//! highlight-expiry logic does not depend on a particular event loop.
//! [`TokioScheduler`] is the runtime-backed implementation.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use tokio::sync::Mutex;

pub type TimerTask = BoxFuture<'static, ()>;

/// Runs a task once after a delay.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: TimerTask) -> ScheduledTask;
}

/// Handle to a task handed to a [`Scheduler`].
///
/// Cancelling before the deadline drops the task unrun. Cancelling after the
/// deadline has no effect on the task, which is already running on its own.
pub struct ScheduledTask {
    cancel: Box<dyn FnOnce() + Send>,
}

impl ScheduledTask {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Box::new(cancel),
        }
    }

    pub fn cancel(self) {
        (self.cancel)()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: TimerTask) -> ScheduledTask {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Detached: aborting the timer after it fired must not cut the task short.
            tokio::spawn(task);
        });
        ScheduledTask::new(move || handle.abort())
    }
}

/// A single replaceable timer: scheduling again cancels whatever was pending.
pub struct CancellableTimer {
    scheduler: Arc<dyn Scheduler>,
    delay: Duration,
    pending: Mutex<Option<ScheduledTask>>,
}

impl CancellableTimer {
    pub fn new(scheduler: Arc<dyn Scheduler>, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: Mutex::new(None),
        }
    }

    pub async fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut pending = self.pending.lock().await;
        if let Some(previous) = pending.take() {
            previous.cancel();
        }
        *pending = Some(self.scheduler.schedule(self.delay, Box::pin(task)));
    }

    /// Returns whether a task was pending.
    pub async fn cancel(&self) -> bool {
        match self.pending.lock().await.take() {
            Some(task) => {
                task.cancel();
                true
            }
            None => false,
        }
    }
}
