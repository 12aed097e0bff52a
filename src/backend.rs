//! # Output backend contract.
//!
//! A [`Backend`] wraps the external service that can emit one message at a
//! time (typically a platform text-to-speech engine). The dispatch core
//! treats it as fire-and-forget: every call returns immediately, and the
//! emission outcome arrives later through
//! [`BackendCallbacks`](crate::BackendCallbacks).
//!
//! ## Rules
//! - `emit` must eventually invoke **at most one** callback kind per
//!   correlation id. A broken backend that never calls back leaves that id
//!   permanently in flight; the core adds no watchdog.
//! - `stop` and `shutdown` are idempotent.
//! - Callbacks may arrive on any thread, including backend-internal ones.

use crate::config::VoiceConfig;
use crate::events::CorrelationId;

/// External one-message-at-a-time output service.
///
/// All methods are non-blocking from the dispatcher's perspective; results
/// are delivered later via [`BackendCallbacks`](crate::BackendCallbacks).
pub trait Backend: Send + Sync + 'static {
    /// True if the backend is initialized and able to emit.
    fn is_available(&self) -> bool;

    /// Starts emitting `message`, tagged with `correlation` so the backend
    /// can echo it back in lifecycle callbacks. Fire-and-forget.
    fn emit(&self, message: &str, correlation: &CorrelationId);

    /// Stops the current emission, if any. Idempotent.
    fn stop(&self);

    /// Applies speech parameters (rate, pitch, locale, queue mode).
    fn configure(&self, config: &VoiceConfig);

    /// Releases backend resources. Idempotent; the backend reports
    /// unavailable afterwards.
    fn shutdown(&self);
}
