//! # Lifecycle guard: binding the dispatcher to an external lifecycle.
//!
//! [`LifecycleGuard`] is a thin adapter between an application lifecycle
//! (activity, window, service) and the dispatcher. It owns no decision
//! logic: hooks are explicit calls the composition root makes, not
//! inherited observer interfaces.
//!
//! ## Rules
//! - [`LifecycleGuard::on_pause`] stops current output; throttle state is
//!   untouched so alerts resume normally when the scope returns.
//! - [`LifecycleGuard::on_destroy`] removes the subscriptions this scope
//!   adopted (so observer callbacks cannot outlive it) and releases the
//!   backend.

use std::sync::Arc;

use crate::dispatch::Dispatcher;
use crate::subscribers::SubscriptionId;

/// Binds dispatcher state to an external lifecycle scope.
pub struct LifecycleGuard {
    dispatcher: Arc<Dispatcher>,
    subscriptions: Vec<SubscriptionId>,
}

impl LifecycleGuard {
    /// Creates a guard for the given dispatcher.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            dispatcher,
            subscriptions: Vec::new(),
        }
    }

    /// Takes ownership of a subscription so it is removed at
    /// [`LifecycleGuard::on_destroy`].
    pub fn adopt(&mut self, id: SubscriptionId) {
        self.subscriptions.push(id);
    }

    /// Background transition: stop current output, keep everything else.
    pub fn on_pause(&self) {
        self.dispatcher.stop_current();
    }

    /// Teardown: unsubscribe adopted observers and release the backend.
    pub fn on_destroy(&mut self) {
        for id in self.subscriptions.drain(..) {
            self.dispatcher.unsubscribe(id);
        }
        self.dispatcher.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::{Alert, Category, Priority};
    use crate::backend::Backend;
    use crate::backend::testing::{BackendCall, RecordingBackend};
    use crate::config::DispatchConfig;
    use crate::events::Event;
    use crate::subscribers::Subscribe;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct Counter {
        count: AtomicUsize,
    }

    #[async_trait]
    impl Subscribe for Counter {
        async fn on_event(&self, _event: &Event) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }

        fn name(&self) -> &'static str {
            "counter"
        }
    }

    fn dispatcher(backend: &Arc<RecordingBackend>) -> Arc<Dispatcher> {
        let backend: Arc<dyn Backend> = backend.clone();
        Dispatcher::new(
            backend,
            DispatchConfig {
                cooldown: Duration::ZERO,
                ..DispatchConfig::default()
            },
        )
    }

    #[tokio::test]
    async fn test_on_pause_stops_current_output() {
        let backend = RecordingBackend::new();
        let d = dispatcher(&backend);
        let guard = LifecycleGuard::new(d.clone());

        let alert = Alert::builder(Category::SpeedExcess)
            .message("slow down")
            .priority(Priority::Normal)
            .build()
            .unwrap();
        d.submit(alert).unwrap();

        guard.on_pause();
        assert_eq!(backend.stop_count(), 1);
        assert!(d.current_emission().is_none());

        // Pause with nothing playing is a no-op.
        guard.on_pause();
        assert_eq!(backend.stop_count(), 1);
    }

    #[tokio::test]
    async fn test_on_destroy_unsubscribes_and_releases_backend() {
        let backend = RecordingBackend::new();
        let d = dispatcher(&backend);
        let mut guard = LifecycleGuard::new(d.clone());

        let counter = Arc::new(Counter {
            count: AtomicUsize::new(0),
        });
        guard.adopt(d.subscribe(counter.clone()));

        guard.on_destroy();
        assert_eq!(backend.calls().last(), Some(&BackendCall::Shutdown));
        assert!(!d.is_available());

        // The adopted subscription is gone: events published afterwards are
        // not delivered to it.
        let cb = d.callbacks();
        cb.on_started(crate::events::CorrelationId::from_raw("late-1"));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(counter.count.load(Ordering::SeqCst), 0);
    }
}
