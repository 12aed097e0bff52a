//! # Alert priority levels.
//!
//! [`Priority`] is a total order used both for preemption decisions and for
//! the backend's queue-flush behavior. [`Priority::High`] and
//! [`Priority::Urgent`] preempt whatever is currently playing; lower
//! priorities wait on the backend's own queue mode.

use serde::{Deserialize, Serialize};

/// Priority of a voice alert, ordered from least to most important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Informational; never interrupts anything.
    Low = 0,

    /// Default priority for routine alerts.
    Normal = 1,

    /// Interrupts an in-flight emission.
    High = 2,

    /// Interrupts an in-flight emission; reserved for safety-critical alerts.
    Urgent = 3,
}

impl Priority {
    /// Returns the numeric level (0 = Low .. 3 = Urgent).
    #[inline]
    pub fn level(self) -> u8 {
        self as u8
    }

    /// True for priorities that preempt an in-flight emission
    /// ([`Priority::High`] and above).
    #[inline]
    pub fn is_preempting(self) -> bool {
        self >= Priority::High
    }

    /// Returns a short stable label (snake_case) for logs and serialization.
    pub fn as_label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        assert!(Priority::Low < Priority::Normal);
        assert!(Priority::Normal < Priority::High);
        assert!(Priority::High < Priority::Urgent);
    }

    #[test]
    fn test_preempting_threshold() {
        assert!(!Priority::Low.is_preempting());
        assert!(!Priority::Normal.is_preempting());
        assert!(Priority::High.is_preempting());
        assert!(Priority::Urgent.is_preempting());
    }

    #[test]
    fn test_levels() {
        assert_eq!(Priority::Low.level(), 0);
        assert_eq!(Priority::Urgent.level(), 3);
    }
}
