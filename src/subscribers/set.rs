//! # SubscriberSet: non-blocking fan-out over a dynamic set of subscribers.
//!
//! [`SubscriberSet`] distributes each [`Event`](crate::events::Event) to the
//! currently registered subscribers **without awaiting** their processing.
//! Unlike a fixed fan-out, subscribers can be added and removed at runtime;
//! removal is how an observer avoids leaking its callback past its own
//! lifecycle.
//!
//! ## What it guarantees
//! - `emit(&Event)` returns immediately.
//! - Per-subscriber FIFO matching publish order.
//! - A subscriber registered before an event is emitted receives it exactly
//!   once; one unsubscribed before the emit never receives it.
//! - Panics inside subscribers are caught and logged (isolation).
//!
//! ## What it does **not** guarantee
//! - No global ordering across different subscribers.
//! - No retries on per-subscriber queue overflow (events are dropped for
//!   that subscriber).
//!
//! ## Diagram
//! ```text
//!    emit(&Event)
//!        │                        (Arc-clone per subscriber)
//!        ├────────────────► [queue S1] ─► worker S1 ─► on_event()
//!        ├────────────────► [queue S2] ─► worker S2 ─► on_event()
//!        └────────────────► [queue SN] ─► worker SN ─► on_event()
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use futures::FutureExt;
use parking_lot::RwLock;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::events::Event;

use super::Subscribe;

/// Source of unique subscription ids.
static SUBSCRIPTION_SEQ: AtomicU64 = AtomicU64::new(0);

/// Handle identifying one registration in a [`SubscriberSet`].
///
/// Returned by [`SubscriberSet::subscribe`] (and
/// [`Dispatcher::subscribe`](crate::Dispatcher::subscribe)); pass it back to
/// `unsubscribe` when the observer's lifecycle ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn next() -> Self {
        Self(SUBSCRIPTION_SEQ.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// Per-subscriber channel with metadata.
struct SubscriberChannel {
    name: &'static str,
    sender: mpsc::Sender<Arc<Event>>,
    worker: JoinHandle<()>,
}

/// Dynamic fan-out with per-subscriber bounded queues and worker tasks.
pub struct SubscriberSet {
    channels: RwLock<HashMap<SubscriptionId, SubscriberChannel>>,
}

impl SubscriberSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a subscriber and spawns its worker task.
    ///
    /// Must be called from within a tokio runtime. The subscriber observes
    /// only events emitted after this call returns.
    pub fn subscribe(&self, sub: Arc<dyn Subscribe>) -> SubscriptionId {
        let cap = sub.queue_capacity().max(1);
        let name = sub.name();
        let (tx, mut rx) = mpsc::channel::<Arc<Event>>(cap);

        let worker = tokio::spawn(async move {
            while let Some(ev) = rx.recv().await {
                let fut = sub.on_event(ev.as_ref());
                if let Err(panic_err) = std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                    tracing::error!(
                        subscriber = sub.name(),
                        "subscriber panicked: {}",
                        panic_message(&*panic_err)
                    );
                }
            }
        });

        let id = SubscriptionId::next();
        self.channels.write().insert(
            id,
            SubscriberChannel {
                name,
                sender: tx,
                worker,
            },
        );
        id
    }

    /// Removes a subscriber.
    ///
    /// The queue is closed; the worker drains already-queued events and then
    /// exits. Returns `false` if the id was not registered (idempotent).
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.channels.write().remove(&id).is_some()
    }

    /// Fan-out one event to all registered subscribers (non-blocking).
    ///
    /// If a subscriber's queue is **full** or **closed**, the event is
    /// dropped for it and a warning is logged with the subscriber's name.
    pub fn emit(&self, event: &Event) {
        let ev = Arc::new(event.clone());
        let channels = self.channels.read();
        for channel in channels.values() {
            match channel.sender.try_send(Arc::clone(&ev)) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_)) => {
                    tracing::warn!(subscriber = channel.name, "dropped event: queue full");
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    tracing::warn!(subscriber = channel.name, "dropped event: worker closed");
                }
            }
        }
    }

    /// Graceful shutdown: close all queues and await worker completion.
    pub async fn shutdown(&self) {
        let drained: Vec<SubscriberChannel> = {
            let mut channels = self.channels.write();
            channels.drain().map(|(_, ch)| ch).collect()
        };
        let mut workers = Vec::with_capacity(drained.len());
        for ch in drained {
            drop(ch.sender);
            workers.push(ch.worker);
        }
        for h in workers {
            let _ = h.await;
        }
    }

    /// True if there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.read().is_empty()
    }

    /// Number of subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.read().len()
    }
}

impl Default for SubscriberSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Recovers the text of a caught panic payload.
///
/// Panics raised with `panic!("...")` carry a `&'static str` or a `String`;
/// anything else has no message to recover.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{CorrelationId, EventKind};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::time::Duration;

    struct Recorder {
        seen: Mutex<Vec<EventKind>>,
    }

    impl Recorder {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Subscribe for Recorder {
        async fn on_event(&self, event: &Event) {
            self.seen.lock().push(event.kind);
        }

        fn name(&self) -> &'static str {
            "recorder"
        }
    }

    async fn settle() {
        // Give worker tasks a chance to drain their queues.
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn test_registered_subscriber_receives_exactly_once() {
        let set = SubscriberSet::new();
        let rec = Recorder::new();
        set.subscribe(rec.clone());

        set.emit(&Event::new(
            EventKind::Started,
            CorrelationId::from_raw("s-1"),
        ));
        settle().await;

        assert_eq!(rec.seen.lock().as_slice(), &[EventKind::Started]);
    }

    #[tokio::test]
    async fn test_unsubscribed_before_publish_receives_nothing() {
        let set = SubscriberSet::new();
        let rec = Recorder::new();
        let id = set.subscribe(rec.clone());
        assert!(set.unsubscribe(id));
        assert!(!set.unsubscribe(id));

        set.emit(&Event::new(
            EventKind::Completed,
            CorrelationId::from_raw("s-2"),
        ));
        settle().await;

        assert!(rec.seen.lock().is_empty());
    }

    #[tokio::test]
    async fn test_fifo_order_per_subscriber() {
        let set = SubscriberSet::new();
        let rec = Recorder::new();
        set.subscribe(rec.clone());

        let id = CorrelationId::from_raw("s-3");
        set.emit(&Event::new(EventKind::Started, id.clone()));
        set.emit(&Event::new(EventKind::Failed, id.clone()));
        set.emit(&Event::new(EventKind::Completed, id));
        settle().await;

        assert_eq!(
            rec.seen.lock().as_slice(),
            &[EventKind::Started, EventKind::Failed, EventKind::Completed]
        );
    }

    #[tokio::test]
    async fn test_panicking_subscriber_does_not_affect_others() {
        struct Bomb;

        #[async_trait]
        impl Subscribe for Bomb {
            async fn on_event(&self, _event: &Event) {
                panic!("boom");
            }

            fn name(&self) -> &'static str {
                "bomb"
            }
        }

        let set = SubscriberSet::new();
        set.subscribe(Arc::new(Bomb));
        let rec = Recorder::new();
        set.subscribe(rec.clone());

        set.emit(&Event::new(
            EventKind::Started,
            CorrelationId::from_raw("s-4"),
        ));
        settle().await;

        assert_eq!(rec.seen.lock().as_slice(), &[EventKind::Started]);
    }

    #[test]
    fn test_panic_message_recovers_text() {
        let payload = std::panic::catch_unwind(|| panic!("boom")).unwrap_err();
        assert_eq!(panic_message(&*payload), "boom");

        let payload = std::panic::catch_unwind(|| panic!("code {}", 7)).unwrap_err();
        assert_eq!(panic_message(&*payload), "code 7");

        let payload = std::panic::catch_unwind(|| std::panic::panic_any(42_u32)).unwrap_err();
        assert_eq!(panic_message(&*payload), "unknown panic");
    }

    #[tokio::test]
    async fn test_shutdown_drains_workers() {
        let set = SubscriberSet::new();
        let rec = Recorder::new();
        set.subscribe(rec.clone());

        set.emit(&Event::new(
            EventKind::Started,
            CorrelationId::from_raw("s-5"),
        ));
        set.shutdown().await;

        assert_eq!(rec.seen.lock().as_slice(), &[EventKind::Started]);
        assert!(set.is_empty());
    }
}
