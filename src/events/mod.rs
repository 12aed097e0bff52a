//! # Lifecycle events and the broadcast bus.
//!
//! - [`Event`] / [`EventKind`]: what happened to an accepted submission.
//! - [`CorrelationId`]: links a submission to its events.
//! - [`Bus`]: non-blocking broadcast channel carrying events from backend
//!   callbacks to subscribers.

mod bus;
mod correlation;
mod event;

pub use bus::Bus;
pub use correlation::CorrelationId;
pub use event::{Event, EventKind};
