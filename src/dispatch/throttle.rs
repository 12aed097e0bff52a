//! # Throttle registry: per-category cooldown admission.
//!
//! [`ThrottleRegistry`] tracks the last admitted instant per [`Category`]
//! and admits a new alert only once the cooldown window has elapsed.
//!
//! ## Rules
//! - [`ThrottleRegistry::try_admit`] is the **only** admission primitive:
//!   check and record happen under one lock, so two concurrent calls for the
//!   same category can never both succeed inside one window.
//! - [`ThrottleRegistry::remaining_cooldown`] is read-only inspection; it
//!   never records anything and cannot gate admission.
//! - Replacing the cooldown at runtime does not rewrite stored instants; it
//!   only changes future comparisons.
//! - `cooldown = 0` admits everything.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use voicegate::{Category, ThrottleRegistry};
//!
//! let reg = ThrottleRegistry::new(Duration::from_secs(30));
//! assert!(reg.try_admit(&Category::SpeedExcess));   // first: admitted
//! assert!(!reg.try_admit(&Category::SpeedExcess));  // inside window: denied
//! assert!(reg.try_admit(&Category::HarshBraking));  // other bucket: admitted
//!
//! reg.reset(&Category::SpeedExcess);
//! assert!(reg.try_admit(&Category::SpeedExcess));   // reset: admitted again
//! ```

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::alerts::Category;

struct Inner {
    cooldown: Duration,
    last_admitted: HashMap<Category, Instant>,
}

/// Per-category last-admission tracker with a shared cooldown window.
pub struct ThrottleRegistry {
    inner: Mutex<Inner>,
}

impl ThrottleRegistry {
    /// Creates a registry with the given cooldown window.
    pub fn new(cooldown: Duration) -> Self {
        Self {
            inner: Mutex::new(Inner {
                cooldown,
                last_admitted: HashMap::new(),
            }),
        }
    }

    /// Atomically checks and records admission for a category.
    ///
    /// Admits when the category has no prior entry or its cooldown has
    /// elapsed; on admission the current instant is recorded as the new
    /// last-admitted time. On denial the state is left unchanged.
    pub fn try_admit(&self, category: &Category) -> bool {
        let now = Instant::now();
        let mut inner = self.inner.lock();

        let admitted = match inner.last_admitted.get(category) {
            None => true,
            Some(last) => now.duration_since(*last) >= inner.cooldown,
        };
        if admitted {
            inner.last_admitted.insert(category.clone(), now);
        }
        admitted
    }

    /// Time remaining before the category would next admit.
    ///
    /// Returns [`Duration::ZERO`] if the category is admittable now or was
    /// never admitted.
    pub fn remaining_cooldown(&self, category: &Category) -> Duration {
        let inner = self.inner.lock();
        match inner.last_admitted.get(category) {
            None => Duration::ZERO,
            Some(last) => inner.cooldown.saturating_sub(last.elapsed()),
        }
    }

    /// Clears the entry for one category; its next `try_admit` succeeds.
    pub fn reset(&self, category: &Category) {
        self.inner.lock().last_admitted.remove(category);
    }

    /// Clears all entries.
    pub fn reset_all(&self) {
        self.inner.lock().last_admitted.clear();
    }

    /// The current cooldown window.
    pub fn cooldown(&self) -> Duration {
        self.inner.lock().cooldown
    }

    /// Replaces the cooldown window.
    ///
    /// Stored instants are kept; only future comparisons use the new value.
    pub fn set_cooldown(&self, cooldown: Duration) {
        self.inner.lock().cooldown = cooldown;
    }
}
