//! # Subscriber API: observing alert lifecycle events.
//!
//! - [`Subscribe`]: the trait observers implement.
//! - [`SubscriberSet`]: dynamic fan-out with per-subscriber queues/workers.
//! - [`SubscriptionId`]: handle for removing a registration.

mod set;
mod subscriber;

pub use set::{SubscriberSet, SubscriptionId};
pub use subscriber::Subscribe;

#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::LogWriter;
