//! # Alert categories: throttling buckets and preemption tags.
//!
//! A [`Category`] identifies a class of alert. It is used as the key for
//! per-category cooldown throttling and carried in lifecycle events through
//! the correlation id.
//!
//! The built-in variants cover the driver-behavior domain; [`Category::Custom`]
//! carries an arbitrary interned string so the category set stays open without
//! giving up exhaustiveness checking elsewhere.
//!
//! ## Example
//! ```rust
//! use voicegate::Category;
//!
//! let speed = Category::SpeedExcess;
//! assert_eq!(speed.as_label(), "speed_excess");
//!
//! let custom = Category::custom("low-fuel");
//! assert_eq!(custom.as_label(), "low-fuel");
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Classification of a voice alert.
///
/// Categories double as throttling buckets: two alerts of the same category
/// share a cooldown window, while different categories are throttled
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Vehicle speed exceeded the limit plus the configured margin.
    SpeedExcess,

    /// Deceleration sharper than the harsh-braking threshold.
    HarshBraking,

    /// Acceleration sharper than the harsh-acceleration threshold.
    HarshAcceleration,

    /// Lateral acceleration sharper than the sharp-turn threshold.
    SharpTurn,

    /// Application-defined category carrying its own label.
    Custom(Arc<str>),
}

impl Category {
    /// Creates a custom category from an arbitrary label.
    pub fn custom(label: impl Into<Arc<str>>) -> Self {
        Category::Custom(label.into())
    }

    /// Returns a short stable label (snake_case) for use in logs, metrics,
    /// and correlation ids. Custom categories return their own label.
    pub fn as_label(&self) -> &str {
        match self {
            Category::SpeedExcess => "speed_excess",
            Category::HarshBraking => "harsh_braking",
            Category::HarshAcceleration => "harsh_acceleration",
            Category::SharpTurn => "sharp_turn",
            Category::Custom(label) => label,
        }
    }

    /// Returns a human-readable description, used as the catalog fallback
    /// when no predefined message exists for the category.
    pub fn description(&self) -> String {
        match self {
            Category::SpeedExcess => "Speed limit exceeded".to_string(),
            Category::HarshBraking => "Harsh braking".to_string(),
            Category::HarshAcceleration => "Harsh acceleration".to_string(),
            Category::SharpTurn => "Sharp turn".to_string(),
            Category::Custom(label) => label.to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_labels_are_stable() {
        assert_eq!(Category::SpeedExcess.as_label(), "speed_excess");
        assert_eq!(Category::HarshBraking.as_label(), "harsh_braking");
        assert_eq!(Category::HarshAcceleration.as_label(), "harsh_acceleration");
        assert_eq!(Category::SharpTurn.as_label(), "sharp_turn");
    }

    #[test]
    fn test_custom_label_passthrough() {
        let c = Category::custom("low-fuel");
        assert_eq!(c.as_label(), "low-fuel");
        assert_eq!(c.description(), "low-fuel");
    }

    #[test]
    fn test_custom_categories_are_distinct_buckets() {
        let a = Category::custom("a");
        let b = Category::custom("b");
        assert_ne!(a, b);
        assert_eq!(a, Category::custom("a"));
    }
}
