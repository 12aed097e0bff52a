//! # Deferred alert delivery.
//!
//! [`Scheduler`] hands alerts to the dispatcher after a delay. It is modeled
//! purely as "something that eventually calls
//! [`Dispatcher::submit`](crate::Dispatcher::submit)": a scheduled alert
//! that fires goes through the exact same throttle/preemption path as a
//! direct submission, and a denial at fire time is logged, not retried.
//!
//! Scheduled alerts are grouped by [`Category`] for cancellation, via one
//! parent [`CancellationToken`] per category; each timer task holds a child
//! token, so cancelling the parent cancels every pending timer of that
//! category at once.
//!
//! ## Rules
//! - In-memory only: pending timers do not survive the process.
//! - [`Scheduler::cancel`] / [`Scheduler::cancel_all`] affect only timers
//!   that have not fired yet.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::alerts::{Alert, AlertRecord, Category};
use crate::dispatch::Dispatcher;
use crate::error::DispatchError;

/// Schedules alerts for deferred submission, cancellable by category.
pub struct Scheduler {
    dispatcher: Arc<Dispatcher>,
    tags: Mutex<HashMap<Category, CancellationToken>>,
}

impl Scheduler {
    /// Creates a scheduler submitting into the given dispatcher.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            dispatcher,
            tags: Mutex::new(HashMap::new()),
        }
    }

    /// Schedules an alert for submission after `delay`.
    ///
    /// Must be called from within a tokio runtime. The submission outcome at
    /// fire time is logged; a denial (throttled, backend unavailable) is not
    /// retried.
    pub fn schedule(&self, alert: Alert, delay: Duration) {
        let token = self
            .tags
            .lock()
            .entry(alert.category().clone())
            .or_insert_with(CancellationToken::new)
            .child_token();
        let dispatcher = Arc::clone(&self.dispatcher);

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    match dispatcher.submit(alert) {
                        Ok(correlation) => {
                            tracing::debug!(%correlation, "deferred alert submitted");
                        }
                        Err(err) => {
                            tracing::debug!(error = err.as_label(), "deferred alert rejected");
                        }
                    }
                }
            }
        });
    }

    /// Schedules an alert reconstructed from a serialized snapshot.
    ///
    /// # Errors
    /// [`DispatchError::EmptyMessage`] if the snapshot's message is empty.
    pub fn schedule_record(
        &self,
        record: AlertRecord,
        delay: Duration,
    ) -> Result<(), DispatchError> {
        self.schedule(record.into_alert()?, delay);
        Ok(())
    }

    /// Cancels all pending timers of one category.
    pub fn cancel(&self, category: &Category) {
        if let Some(token) = self.tags.lock().remove(category) {
            token.cancel();
        }
    }

    /// Cancels every pending timer.
    pub fn cancel_all(&self) {
        let tokens: Vec<CancellationToken> = {
            let mut tags = self.tags.lock();
            tags.drain().map(|(_, token)| token).collect()
        };
        for token in tokens {
            token.cancel();
        }
    }
}
