//! # Event bus for broadcasting lifecycle events.
//!
//! [`Bus`] is a thin wrapper around [`tokio::sync::broadcast`] that provides
//! non-blocking event publishing from multiple sources (backend callbacks,
//! the dispatcher).
//!
//! ## Architecture
//! ```text
//! Publishers (many):                    Subscriber (one):
//!   BackendCallbacks ──┐
//!   (arbitrary thread) ├────► Bus ────► subscriber_listener ───► SubscriberSet
//!   Dispatcher ────────┘ (broadcast)      (in Dispatcher)
//! ```
//!
//! voicegate uses a single bus receiver (the dispatcher's listener task) that
//! fans events out to registered subscribers via
//! [`SubscriberSet`](crate::SubscriberSet).
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never blocks; it calls `broadcast::Sender::send`.
//! - **Bounded capacity**: a single ring buffer stores recent events for all receivers.
//! - **Lag handling**: slow receivers get `RecvError::Lagged(n)` and skip `n` oldest items.
//! - **No replay**: events published before a receiver subscribes are never
//!   delivered to it.

use tokio::sync::broadcast;

use super::event::Event;

/// Broadcast channel for lifecycle events.
///
/// Thin wrapper over [`tokio::sync::broadcast`] that provides a
/// `publish`/`subscribe` API. Multiple publishers can publish concurrently
/// from any thread; subscribers receive clones of each event in publish order.
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<Event>,
}

impl Bus {
    /// Creates a new bus with the given channel capacity.
    ///
    /// Capacity is shared across all receivers; the minimum is 1 (clamped).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<Event>(capacity);
        Self { tx }
    }

    /// Publishes an event to all active receivers.
    ///
    /// If there are no receivers, the event is dropped; the call still
    /// returns immediately.
    pub fn publish(&self, ev: Event) {
        let _ = self.tx.send(ev);
    }

    /// Creates a new receiver that will observe subsequent events.
    ///
    /// - Each call creates an **independent** receiver.
    /// - A receiver only gets events **sent after** it subscribes.
    /// - Slow receivers get `RecvError::Lagged(n)` and skip over missed items.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{CorrelationId, EventKind};

    #[tokio::test]
    async fn test_receiver_gets_events_in_publish_order() {
        let bus = Bus::new(16);
        let mut rx = bus.subscribe();

        let id = CorrelationId::from_raw("bus-1");
        bus.publish(Event::new(EventKind::Started, id.clone()));
        bus.publish(Event::new(EventKind::Completed, id));

        assert_eq!(rx.recv().await.unwrap().kind, EventKind::Started);
        assert_eq!(rx.recv().await.unwrap().kind, EventKind::Completed);
    }

    #[tokio::test]
    async fn test_no_replay_for_late_receiver() {
        let bus = Bus::new(16);
        bus.publish(Event::new(
            EventKind::Started,
            CorrelationId::from_raw("bus-2"),
        ));

        let mut late = bus.subscribe();
        bus.publish(Event::new(
            EventKind::Completed,
            CorrelationId::from_raw("bus-3"),
        ));

        let first = late.recv().await.unwrap();
        assert_eq!(first.kind, EventKind::Completed);
        assert_eq!(first.correlation.as_str(), "bus-3");
    }
}
