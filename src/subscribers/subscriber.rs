//! # Event subscriber trait.
//!
//! Provides [`Subscribe`], the extension point for observing alert lifecycle
//! events (UI indicators, audit logs, metrics).
//!
//! Each subscriber gets:
//! - **Dedicated worker task** (runs independently)
//! - **Per-subscriber bounded queue** (capacity via [`Subscribe::queue_capacity`])
//! - **Panic isolation** (panics are caught and logged; other subscribers
//!   are unaffected)
//!
//! ## Architecture
//! ```text
//! SubscriberSet ──► [bounded queue] ──► worker task ──► subscriber.on_event()
//!                                    └─► panic caught → tracing::error
//! ```
//!
//! ## Rules
//! - A slow subscriber only affects its own queue.
//! - Queue overflow drops the event **for this subscriber only**; other
//!   subscribers are unaffected.
//! - Events are processed sequentially (FIFO) per subscriber, in publish order.
//! - Subscribers do not block publishers or each other.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use voicegate::{Event, EventKind, Subscribe};
//!
//! struct FailureCounter;
//!
//! #[async_trait]
//! impl Subscribe for FailureCounter {
//!     async fn on_event(&self, ev: &Event) {
//!         if matches!(ev.kind, EventKind::Failed) {
//!             // export a metric, etc.
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "failure-counter" }
//! }
//! ```

use async_trait::async_trait;

use crate::events::Event;

/// Event subscriber for alert lifecycle observability.
///
/// Each subscriber runs in isolation:
/// - **Bounded queue** buffers events (capacity via [`Self::queue_capacity`]).
/// - **Dedicated worker task** processes events sequentially (FIFO).
/// - **Panic isolation**: panics are caught and logged.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Handle errors internally; do not panic.
/// - Slow processing affects only this subscriber's queue.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Processes a single event.
    ///
    /// Called from a dedicated worker task, not in the publisher context.
    /// Events are delivered in FIFO publish order per subscriber.
    async fn on_event(&self, event: &Event);

    /// Returns the subscriber name used in logs and overflow warnings.
    ///
    /// Prefer short, descriptive names (e.g., "metrics", "audit", "ui").
    /// The default uses `type_name::<Self>()`, which can be verbose -
    /// override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Returns the preferred queue capacity for this subscriber.
    ///
    /// Overflow behavior:
    /// 1) The new event is dropped for this subscriber only,
    /// 2) a warning is logged with the subscriber's name,
    /// 3) other subscribers are unaffected.
    ///
    /// The runtime clamps capacity to a minimum of 1.
    ///
    /// Default: 1024.
    fn queue_capacity(&self) -> usize {
        1024
    }
}
