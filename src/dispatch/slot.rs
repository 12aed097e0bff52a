//! # The output slot: what the backend is currently emitting.
//!
//! The slot mirrors the hardware constraint of one audio channel: exactly
//! one producer-visible slot exists, owned by the
//! [`Dispatcher`](crate::Dispatcher) and mutated only inside its critical
//! section. External code can read a snapshot via
//! [`Dispatcher::current_emission`](crate::Dispatcher::current_emission) but
//! never mutate it.

use crate::alerts::{Category, Priority};
use crate::events::CorrelationId;

/// Snapshot of the emission currently occupying the output channel.
#[derive(Debug, Clone)]
pub struct SlotOccupant {
    /// Category of the occupying alert.
    pub category: Category,

    /// Priority of the occupying alert.
    pub priority: Priority,

    /// Correlation id of the occupying alert.
    pub correlation: CorrelationId,
}

impl SlotOccupant {
    pub(crate) fn new(category: Category, priority: Priority, correlation: CorrelationId) -> Self {
        Self {
            category,
            priority,
            correlation,
        }
    }
}
