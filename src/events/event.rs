//! # Lifecycle events for accepted submissions.
//!
//! The [`EventKind`] enum classifies the three lifecycle stages the backend
//! reports for an accepted alert: started, completed, failed. The [`Event`]
//! struct carries the correlation id, an optional failure detail, a
//! wall-clock timestamp, and a global sequence number.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically in publish order. Use `seq` to restore the exact order when
//! events are observed out of order across subscribers.
//!
//! ## Example
//! ```rust
//! use voicegate::{CorrelationId, Event, EventKind};
//!
//! let id = CorrelationId::from_raw("speed_excess-1");
//! let ev = Event::new(EventKind::Failed, id.clone()).with_detail("engine busy");
//!
//! assert_eq!(ev.kind, EventKind::Failed);
//! assert_eq!(ev.correlation, id);
//! assert_eq!(ev.detail.as_deref(), Some("engine busy"));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

use crate::events::CorrelationId;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The backend began emitting the message.
    ///
    /// Sets:
    /// - `correlation`: id of the accepted submission
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    Started,

    /// The backend finished emitting the message.
    ///
    /// Sets:
    /// - `correlation`: id of the accepted submission
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    Completed,

    /// The backend reported an emission failure.
    ///
    /// Failure never surfaces as a `submit` error; it arrives only here.
    ///
    /// Sets:
    /// - `correlation`: id of the accepted submission
    /// - `detail`: backend-provided failure detail, if any
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    Failed,
}

impl EventKind {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(self) -> &'static str {
        match self {
            EventKind::Started => "started",
            EventKind::Completed => "completed",
            EventKind::Failed => "failed",
        }
    }
}

/// Lifecycle event with ordering metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - `detail` is set only for [`EventKind::Failed`]
#[derive(Debug, Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Id of the submission this event belongs to.
    pub correlation: CorrelationId,
    /// Human-readable detail (failure reason).
    pub detail: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with the current timestamp and
    /// the next global sequence number.
    pub fn new(kind: EventKind, correlation: CorrelationId) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            correlation,
            detail: None,
        }
    }

    /// Attaches a human-readable detail.
    #[inline]
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// True for kinds that end the emission lifecycle
    /// ([`EventKind::Completed`] and [`EventKind::Failed`]).
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, EventKind::Completed | EventKind::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_monotonic() {
        let id = CorrelationId::from_raw("t-1");
        let a = Event::new(EventKind::Started, id.clone());
        let b = Event::new(EventKind::Completed, id);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_terminal_kinds() {
        let id = CorrelationId::from_raw("t-2");
        assert!(!Event::new(EventKind::Started, id.clone()).is_terminal());
        assert!(Event::new(EventKind::Completed, id.clone()).is_terminal());
        assert!(Event::new(EventKind::Failed, id).is_terminal());
    }

    #[test]
    fn test_detail_attachment() {
        let ev = Event::new(EventKind::Failed, CorrelationId::from_raw("t-3"))
            .with_detail("synthesizer offline");
        assert_eq!(ev.detail.as_deref(), Some("synthesizer offline"));
    }
}
