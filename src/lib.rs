//! # voicegate
//!
//! **voicegate** mediates delivery of short spoken alert messages to a
//! single output channel that can only emit one message at a time.
//!
//! Producers submit categorized, prioritized alerts at arbitrary rates; the
//! crate suppresses redundant near-duplicates per category within a cooldown
//! window, lets high-priority alerts preempt an in-flight emission, and
//! reports asynchronous lifecycle events without blocking producers. The
//! actual emission (typically text-to-speech) is an external [`Backend`].
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │    Alert     │   │    Alert     │   │    Alert     │
//!     │ (producer 1) │   │ (producer 2) │   │ (producer N) │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Dispatcher (the single "try to emit" decision point)             │
//! │  - ThrottleRegistry (per-category cooldown, atomic admit)         │
//! │  - preemption policy (High/Urgent interrupt current output)       │
//! │  - OutputSlot (the one audio channel, exclusively owned)          │
//! └──────────────┬──────────────────────────────────┬─────────────────┘
//!                ▼                                  │
//!       ┌──────────────────┐                        │
//!       │  Backend (TTS)   │── on_started ──────────┤
//!       │  one message at  │── on_completed ────────┤ BackendCallbacks
//!       │  a time          │── on_error ────────────┤ (any thread)
//!       └──────────────────┘                        ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                     Bus (broadcast channel)                       │
//! └─────────────────────────────────┬─────────────────────────────────┘
//!                                   ▼
//!                         ┌──────────────────┐
//!                         │  event listener  │
//!                         │  (in Dispatcher) │
//!                         └────────┬─────────┘
//!                                  ▼
//!                           SubscriberSet
//!                        (per-sub queues)
//!                     ┌─────────┼─────────┐
//!                     ▼         ▼         ▼
//!                 worker1   worker2   workerN
//!                     ▼         ▼         ▼
//!                sub1.on   sub2.on   subN.on
//!                 _event()  _event()  _event()
//! ```
//!
//! ### Submission flow
//! ```text
//! Alert ──► Dispatcher::submit()
//!
//!   ├─► message empty?            ─► Err(EmptyMessage)
//!   ├─► backend unavailable?      ─► Err(BackendUnavailable)
//!   ├─► ThrottleRegistry::try_admit(category)
//!   │     └─ denied               ─► Err(Throttled{remaining})
//!   └─► critical section over the slot:
//!         ├─ occupied && priority >= High ─► backend.stop()
//!         ├─ slot = (category, priority, correlation)
//!         └─ backend.emit(message, correlation)
//!
//! later, from the backend's own thread:
//!   on_started / on_completed / on_error ─► Bus ─► subscribers
//! ```
//!
//! ## Features
//! | Area              | Description                                                        | Key types / traits                       |
//! |-------------------|--------------------------------------------------------------------|------------------------------------------|
//! | **Dispatch**      | Atomic throttle + preempt + emit decision.                         | [`Dispatcher`], [`ThrottleRegistry`]     |
//! | **Alerts**        | Immutable, validated alert values.                                 | [`Alert`], [`Category`], [`Priority`]    |
//! | **Events**        | Lifecycle events fanned out to subscribers.                        | [`Event`], [`Subscribe`], [`Bus`]        |
//! | **Backend**       | Contract for the external one-at-a-time output service.            | [`Backend`], [`BackendCallbacks`]        |
//! | **Lifecycle**     | Bind dispatcher state to an application lifecycle.                 | [`LifecycleGuard`]                       |
//! | **Errors**        | Typed rejections; emission failures arrive as events.              | [`DispatchError`], [`ConfigError`]       |
//! | **Extras**        | Message catalog, behavior analyzer, deferred delivery.             | [`catalog`], [`BehaviorAnalyzer`], [`Scheduler`] |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] subscriber
//!   _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use voicegate::{
//!     Alert, Backend, Category, CorrelationId, DispatchConfig, DispatchError, Dispatcher,
//!     Priority, VoiceConfig,
//! };
//!
//! // A backend that swallows everything (real ones wrap a TTS engine and
//! // call back through Dispatcher::callbacks()).
//! struct NullBackend;
//!
//! impl Backend for NullBackend {
//!     fn is_available(&self) -> bool { true }
//!     fn emit(&self, _message: &str, _correlation: &CorrelationId) {}
//!     fn stop(&self) {}
//!     fn configure(&self, _config: &VoiceConfig) {}
//!     fn shutdown(&self) {}
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let dispatcher = Dispatcher::new(
//!         Arc::new(NullBackend),
//!         DispatchConfig {
//!             cooldown: Duration::from_secs(30),
//!             ..DispatchConfig::default()
//!         },
//!     );
//!
//!     let alert = Alert::builder(Category::SpeedExcess)
//!         .message("Speed limit exceeded. Please slow down.")
//!         .priority(Priority::High)
//!         .build()
//!         .unwrap();
//!     let correlation = dispatcher.submit(alert).unwrap();
//!     println!("accepted: {correlation}");
//!
//!     // The same category inside the cooldown window is suppressed.
//!     let repeat = Alert::builder(Category::SpeedExcess)
//!         .message("Speed limit exceeded. Please slow down.")
//!         .build()
//!         .unwrap();
//!     assert!(matches!(
//!         dispatcher.submit(repeat),
//!         Err(DispatchError::Throttled { .. })
//!     ));
//! }
//! ```

mod alerts;
mod analyzer;
mod backend;
mod config;
mod dispatch;
mod error;
mod events;
mod lifecycle;
mod scheduler;
mod subscribers;

pub mod catalog;

// ---- Public re-exports ----

pub use alerts::{Alert, AlertBuilder, AlertRecord, Category, Priority};
pub use analyzer::BehaviorAnalyzer;
pub use backend::Backend;
pub use catalog::MessageLocale;
pub use config::{DispatchConfig, QueueMode, VoiceConfig, PITCH_RANGE, SPEECH_RATE_RANGE};
pub use dispatch::{should_preempt, BackendCallbacks, Dispatcher, SlotOccupant, ThrottleRegistry};
pub use error::{ConfigError, DispatchError};
pub use events::{Bus, CorrelationId, Event, EventKind};
pub use lifecycle::LifecycleGuard;
pub use scheduler::Scheduler;
pub use subscribers::{Subscribe, SubscriberSet, SubscriptionId};

// Optional: expose a simple built-in logging subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
