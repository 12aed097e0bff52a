//! # Dispatcher: the single "try to emit" decision point.
//!
//! The [`Dispatcher`] composes the [`ThrottleRegistry`], the preemption
//! policy, and the [`Backend`] into one atomic submission operation. It owns
//! the single output slot and the event bus wiring.
//!
//! ## High-level architecture
//! ```text
//! Producers (any thread):
//!   Alert ──► Dispatcher::submit()
//!               ├─► reject: EmptyMessage / BackendUnavailable
//!               ├─► ThrottleRegistry::try_admit(category)
//!               │       └─ denied ──► Err(Throttled{remaining})   (no side effects)
//!               └─► critical section over the slot:
//!                     ├─ should_preempt(priority, slot)? ──► backend.stop()
//!                     ├─ slot = (category, priority, correlation)
//!                     └─► backend.emit(message, correlation)
//!
//! Backend (its own thread), later:
//!   BackendCallbacks::{on_started, on_completed, on_error}
//!       └─► clear slot on terminal callback ──► Bus ──► listener ──► SubscriberSet
//!                                                        ┌─────────┬─────────┐
//!                                                        ▼         ▼         ▼
//!                                                  sub1.on_event  ...  subN.on_event
//! ```
//!
//! ## Rules
//! - A denied or failed submission is never retried by the core; retry is a
//!   producer decision.
//! - Backend emission failures surface as [`EventKind::Failed`] events, not
//!   as `submit` errors, and never poison the registry or the slot.
//! - The slot is mutated only inside `submit`, `stop_current`, and terminal
//!   callbacks; it is never exposed for external mutation.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::broadcast;

use crate::alerts::{Alert, Category, Priority};
use crate::backend::Backend;
use crate::catalog;
use crate::config::{DispatchConfig, VoiceConfig};
use crate::dispatch::policy::should_preempt;
use crate::dispatch::slot::SlotOccupant;
use crate::dispatch::throttle::ThrottleRegistry;
use crate::error::DispatchError;
use crate::events::{Bus, CorrelationId, Event, EventKind};
use crate::subscribers::{Subscribe, SubscriberSet, SubscriptionId};

/// Composes throttling, preemption, and backend calls into one atomic
/// "try to emit" operation.
///
/// Construct once at the application's composition root with
/// [`Dispatcher::new`] and share via [`Arc`]; there is no hidden singleton.
pub struct Dispatcher {
    backend: Arc<dyn Backend>,
    throttle: ThrottleRegistry,
    slot: Mutex<Option<SlotOccupant>>,
    bus: Bus,
    subs: Arc<SubscriberSet>,
    voice: Mutex<VoiceConfig>,
}

impl Dispatcher {
    /// Creates a dispatcher over the given backend.
    ///
    /// Spawns the bus listener task, so this must be called from within a
    /// tokio runtime.
    pub fn new(backend: Arc<dyn Backend>, cfg: DispatchConfig) -> Arc<Self> {
        let bus = Bus::new(cfg.bus_capacity_clamped());
        let subs = Arc::new(SubscriberSet::new());
        Self::spawn_listener(&bus, Arc::clone(&subs));

        Arc::new(Self {
            backend,
            throttle: ThrottleRegistry::new(cfg.cooldown),
            slot: Mutex::new(None),
            bus,
            subs,
            voice: Mutex::new(VoiceConfig::default()),
        })
    }

    /// Subscribes to the bus and forwards events to the subscriber set
    /// (fire-and-forget).
    fn spawn_listener(bus: &Bus, subs: Arc<SubscriberSet>) {
        let mut rx = bus.subscribe();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(ev) => subs.emit(&ev),
                    Err(broadcast::error::RecvError::Closed) => break,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "event listener lagged; events skipped");
                    }
                }
            }
        });
    }

    /// Submits an alert for emission.
    ///
    /// On acceptance the correlation id is returned synchronously; the
    /// emission outcome arrives later as [`Event`]s. On rejection nothing
    /// was recorded and no backend call was made.
    ///
    /// # Errors
    /// - [`DispatchError::EmptyMessage`] — message empty after trimming
    /// - [`DispatchError::BackendUnavailable`] — backend reports unavailable
    /// - [`DispatchError::Throttled`] — category inside its cooldown window
    pub fn submit(&self, alert: Alert) -> Result<CorrelationId, DispatchError> {
        if alert.message().trim().is_empty() {
            return Err(DispatchError::EmptyMessage);
        }
        if !self.backend.is_available() {
            return Err(DispatchError::BackendUnavailable);
        }
        if !self.throttle.try_admit(alert.category()) {
            return Err(DispatchError::Throttled {
                remaining: self.throttle.remaining_cooldown(alert.category()),
            });
        }

        let correlation = CorrelationId::next(alert.category());
        {
            let mut slot = self.slot.lock();
            if should_preempt(alert.priority(), &slot) {
                self.backend.stop();
            }
            *slot = Some(SlotOccupant::new(
                alert.category().clone(),
                alert.priority(),
                correlation.clone(),
            ));
            self.backend.emit(alert.message(), &correlation);
        }
        Ok(correlation)
    }

    /// Submits the predefined catalog message for a category.
    ///
    /// Uses the locale from the current [`VoiceConfig`].
    pub fn submit_category(
        &self,
        category: Category,
        priority: Priority,
    ) -> Result<CorrelationId, DispatchError> {
        let locale = self.voice.lock().locale;
        let alert = Alert::builder(category.clone())
            .message(catalog::message(&category, locale))
            .priority(priority)
            .build()?;
        self.submit(alert)
    }

    /// Submits a speed-excess alert with the dynamic catalog template.
    ///
    /// Always [`Priority::High`]: a speed warning should interrupt whatever
    /// is currently playing.
    pub fn submit_speed_excess(
        &self,
        current_kmh: u32,
        limit_kmh: u32,
    ) -> Result<CorrelationId, DispatchError> {
        let locale = self.voice.lock().locale;
        let alert = Alert::builder(Category::SpeedExcess)
            .message(catalog::speed_excess_message(current_kmh, limit_kmh, locale))
            .priority(Priority::High)
            .build()?;
        self.submit(alert)
    }

    /// Stops the current emission and clears the slot.
    ///
    /// Idempotent: safe to call when nothing is playing (the backend is not
    /// touched in that case). Throttle state is unaffected.
    pub fn stop_current(&self) {
        let mut slot = self.slot.lock();
        if slot.take().is_some() {
            self.backend.stop();
        }
    }

    /// Applies new speech parameters to the backend and remembers them for
    /// catalog message locale selection.
    pub fn configure(&self, config: VoiceConfig) {
        self.backend.configure(&config);
        *self.voice.lock() = config;
    }

    /// The currently applied speech parameters.
    pub fn voice_config(&self) -> VoiceConfig {
        self.voice.lock().clone()
    }

    /// True if the backend is able to emit.
    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    /// Snapshot of the emission currently occupying the output channel.
    pub fn current_emission(&self) -> Option<SlotOccupant> {
        self.slot.lock().clone()
    }

    /// The throttle registry, for inspection, reset, and cooldown changes.
    pub fn throttle(&self) -> &ThrottleRegistry {
        &self.throttle
    }

    /// Registers a lifecycle event subscriber.
    ///
    /// Delivery starts with the next event the listener task fans out. An
    /// event published just before this call may still be in flight between
    /// the bus and the subscriber set and then reaches the new subscriber
    /// too; use [`Dispatcher::events`] for a receiver that strictly observes
    /// only events published after it was created.
    pub fn subscribe(&self, sub: Arc<dyn Subscribe>) -> SubscriptionId {
        self.subs.subscribe(sub)
    }

    /// Removes a lifecycle event subscriber. Idempotent.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subs.unsubscribe(id)
    }

    /// A raw receiver observing subsequent events, for consumers that
    /// prefer a channel over the [`Subscribe`] trait.
    pub fn events(&self) -> broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    /// Returns the callback handle to wire into the backend.
    ///
    /// The handle holds a weak reference: callbacks arriving after the
    /// dispatcher is dropped are ignored.
    pub fn callbacks(self: &Arc<Self>) -> BackendCallbacks {
        BackendCallbacks {
            dispatcher: Arc::downgrade(self),
        }
    }

    /// Stops the current emission and releases the backend.
    pub fn shutdown(&self) {
        self.stop_current();
        self.backend.shutdown();
    }

    /// Clears the slot iff it is occupied by the given correlation id.
    fn release_slot(&self, correlation: &CorrelationId) {
        let mut slot = self.slot.lock();
        if slot
            .as_ref()
            .is_some_and(|occ| occ.correlation == *correlation)
        {
            *slot = None;
        }
    }
}

/// Callback surface the backend invokes to report emission lifecycle.
///
/// Cloneable and thread-safe; the backend may call it from any execution
/// context. Each call publishes an [`Event`] on the bus; terminal callbacks
/// additionally clear the output slot when the id matches the occupant.
#[derive(Clone)]
pub struct BackendCallbacks {
    dispatcher: Weak<Dispatcher>,
}

impl BackendCallbacks {
    /// The backend began emitting this correlation id.
    pub fn on_started(&self, correlation: CorrelationId) {
        if let Some(d) = self.dispatcher.upgrade() {
            d.bus.publish(Event::new(EventKind::Started, correlation));
        }
    }

    /// The backend finished emitting this correlation id.
    pub fn on_completed(&self, correlation: CorrelationId) {
        if let Some(d) = self.dispatcher.upgrade() {
            d.release_slot(&correlation);
            d.bus.publish(Event::new(EventKind::Completed, correlation));
        }
    }

    /// The backend failed to emit this correlation id.
    ///
    /// Failure is fatal to this single emission only; the dispatcher stays
    /// usable for subsequent submissions.
    pub fn on_error(&self, correlation: CorrelationId, detail: impl Into<Arc<str>>) {
        if let Some(d) = self.dispatcher.upgrade() {
            d.release_slot(&correlation);
            d.bus
                .publish(Event::new(EventKind::Failed, correlation).with_detail(detail));
        }
    }
}
