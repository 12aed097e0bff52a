//! # Dispatch core: throttling, preemption, and the output slot.
//!
//! - [`ThrottleRegistry`]: per-category cooldown admission.
//! - [`should_preempt`]: the pure preemption decision.
//! - [`SlotOccupant`]: snapshot of the single output slot.
//! - [`Dispatcher`] / [`BackendCallbacks`]: the atomic "try to emit"
//!   operation and the backend's way back in.

mod dispatcher;
mod policy;
mod slot;
mod throttle;

pub use dispatcher::{BackendCallbacks, Dispatcher};
pub use policy::should_preempt;
pub use slot::SlotOccupant;
pub use throttle::ThrottleRegistry;
