//! Fire-and-forget click reporting with a single retry.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;
use tracing::{debug, info, warn};

use crate::domain::backend::{BackendClient, BackendError};
use crate::domain::click_event::ClickEvent;

/// Number of retries after the first failed attempt.
pub const MAX_CLICK_RETRIES: usize = 1;

/// Reports click events to the backend.
///
/// A failed attempt (network error or non-2xx) is retried once after
/// `retry_delay`; whatever the retry returns is final. Callers that must not
/// wait use [`ClickTracker::spawn`].
#[derive(Clone)]
pub struct ClickTracker {
    backend: Arc<dyn BackendClient>,
    retry_delay: Duration,
}

impl ClickTracker {
    pub fn new(backend: Arc<dyn BackendClient>, retry_delay: Duration) -> Self {
        Self {
            backend,
            retry_delay,
        }
    }

    /// Sends the click, retrying at most once.
    ///
    /// # Errors
    ///
    /// Returns the error of the last attempt when both attempts fail.
    pub async fn track(&self, event: &ClickEvent) -> Result<(), BackendError> {
        let strategy = FixedInterval::new(self.retry_delay).take(MAX_CLICK_RETRIES);

        let backend = self.backend.as_ref();
        let counter = AtomicUsize::new(0);
        let attempts = &counter;

        Retry::spawn(strategy, move || async move {
            let attempt = attempts.fetch_add(1, Ordering::Relaxed) + 1;
            if attempt > 1 {
                info!(tracking_id = %event.tracking_id, "Retrying click tracking");
            }

            backend.track_click(event).await.inspect_err(|e| {
                warn!(
                    tracking_id = %event.tracking_id,
                    attempt,
                    error = %e,
                    "Failed to track click on backend"
                );
            })
        })
        .await
    }

    /// Runs [`ClickTracker::track`] on a detached task.
    ///
    /// The outcome is only logged. The returned handle may be dropped.
    pub fn spawn(&self, event: ClickEvent) -> JoinHandle<()> {
        let tracker = self.clone();

        tokio::spawn(async move {
            match tracker.track(&event).await {
                Ok(()) => debug!(tracking_id = %event.tracking_id, "Click tracked"),
                Err(e) => warn!(
                    tracking_id = %event.tracking_id,
                    error = %e,
                    "Giving up on click tracking"
                ),
            }
        })
    }
}
