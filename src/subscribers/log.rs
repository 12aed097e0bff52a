//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] forwards lifecycle events to `tracing` in a compact,
//! human-readable form. This is primarily useful for development,
//! debugging, and examples.
//!
//! ## Output format
//! ```text
//! [started] correlation=speed_excess-…
//! [completed] correlation=speed_excess-…
//! [failed] correlation=speed_excess-… detail="engine busy"
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Simple tracing-backed logging subscriber.
///
/// Enabled via the `logging` feature. Emits one log line per lifecycle
/// event for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Subscribe`] for
/// structured logging or metrics collection.
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::Started => {
                tracing::info!(correlation = %e.correlation, "[started]");
            }
            EventKind::Completed => {
                tracing::info!(correlation = %e.correlation, "[completed]");
            }
            EventKind::Failed => {
                tracing::warn!(
                    correlation = %e.correlation,
                    detail = e.detail.as_deref().unwrap_or("-"),
                    "[failed]"
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
