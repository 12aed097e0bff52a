//! # Driver behavior analyzer.
//!
//! [`BehaviorAnalyzer`] turns raw sensor readings into alert categories:
//! it decides *whether* a reading warrants an alert and *which*
//! [`Category`] it belongs to. Thresholds are public fields so applications
//! can tune them; the defaults mirror common telematics values.
//!
//! ## Example
//! ```rust
//! use voicegate::{BehaviorAnalyzer, Category};
//!
//! let analyzer = BehaviorAnalyzer::default();
//! assert!(analyzer.is_speed_excess(75, 60));
//! assert_eq!(
//!     analyzer.classify(-9.5, 0.0),
//!     Some(Category::HarshBraking),
//! );
//! assert_eq!(analyzer.classify(0.5, 0.2), None);
//! ```

use crate::alerts::Category;

/// Threshold-based classifier for driving events.
#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorAnalyzer {
    /// Tolerated margin above the speed limit, km/h.
    pub speed_margin_kmh: u32,

    /// Deceleration below this is harsh braking, m/s² (negative).
    pub harsh_braking_threshold: f32,

    /// Acceleration above this is harsh acceleration, m/s².
    pub harsh_acceleration_threshold: f32,

    /// Absolute lateral acceleration above this is a sharp turn, m/s².
    pub sharp_turn_threshold: f32,
}

impl Default for BehaviorAnalyzer {
    /// Defaults: 10 km/h speed margin, -8.0 m/s² braking, 4.0 m/s²
    /// acceleration, 5.0 m/s² lateral.
    fn default() -> Self {
        Self {
            speed_margin_kmh: 10,
            harsh_braking_threshold: -8.0,
            harsh_acceleration_threshold: 4.0,
            sharp_turn_threshold: 5.0,
        }
    }
}

impl BehaviorAnalyzer {
    /// True if `current_kmh` exceeds the limit plus the tolerated margin.
    pub fn is_speed_excess(&self, current_kmh: u32, limit_kmh: u32) -> bool {
        current_kmh > limit_kmh + self.speed_margin_kmh
    }

    /// True for deceleration sharper than the braking threshold.
    ///
    /// `acceleration` is negative while braking.
    pub fn is_harsh_braking(&self, acceleration: f32) -> bool {
        acceleration < self.harsh_braking_threshold
    }

    /// True for acceleration sharper than the acceleration threshold.
    pub fn is_harsh_acceleration(&self, acceleration: f32) -> bool {
        acceleration > self.harsh_acceleration_threshold
    }

    /// True for lateral acceleration (either direction) sharper than the
    /// sharp-turn threshold.
    pub fn is_sharp_turn(&self, lateral_acceleration: f32) -> bool {
        lateral_acceleration.abs() > self.sharp_turn_threshold
    }

    /// Classifies a longitudinal/lateral acceleration pair.
    ///
    /// Checks braking first, then acceleration, then turning; returns `None`
    /// when no threshold is crossed.
    pub fn classify(&self, acceleration: f32, lateral_acceleration: f32) -> Option<Category> {
        if self.is_harsh_braking(acceleration) {
            Some(Category::HarshBraking)
        } else if self.is_harsh_acceleration(acceleration) {
            Some(Category::HarshAcceleration)
        } else if self.is_sharp_turn(lateral_acceleration) {
            Some(Category::SharpTurn)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_excess_respects_margin() {
        let a = BehaviorAnalyzer::default();
        assert!(!a.is_speed_excess(60, 60));
        assert!(!a.is_speed_excess(70, 60)); // exactly at limit + margin
        assert!(a.is_speed_excess(71, 60));
    }

    #[test]
    fn test_harsh_braking_is_negative_threshold() {
        let a = BehaviorAnalyzer::default();
        assert!(a.is_harsh_braking(-9.0));
        assert!(!a.is_harsh_braking(-8.0));
        assert!(!a.is_harsh_braking(3.0));
    }

    #[test]
    fn test_sharp_turn_uses_absolute_value() {
        let a = BehaviorAnalyzer::default();
        assert!(a.is_sharp_turn(5.5));
        assert!(a.is_sharp_turn(-5.5));
        assert!(!a.is_sharp_turn(4.9));
    }

    #[test]
    fn test_classify_priority_order() {
        let a = BehaviorAnalyzer::default();
        // Braking wins over a simultaneous sharp turn.
        assert_eq!(a.classify(-9.0, 6.0), Some(Category::HarshBraking));
        assert_eq!(a.classify(5.0, 0.0), Some(Category::HarshAcceleration));
        assert_eq!(a.classify(0.0, 6.0), Some(Category::SharpTurn));
        assert_eq!(a.classify(0.0, 0.0), None);
    }

    #[test]
    fn test_custom_thresholds() {
        let a = BehaviorAnalyzer {
            speed_margin_kmh: 0,
            ..BehaviorAnalyzer::default()
        };
        assert!(a.is_speed_excess(61, 60));
    }
}
