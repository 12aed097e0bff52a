//! # Dispatch and voice configuration.
//!
//! Two configuration objects live here:
//!
//! 1. [`DispatchConfig`] — settings for the dispatcher itself (cooldown
//!    window, event bus capacity), consumed by
//!    [`Dispatcher::new`](crate::Dispatcher::new).
//! 2. [`VoiceConfig`] — speech parameters forwarded to the output backend,
//!    validated at construction via [`VoiceConfig::new`].
//!
//! ## Sentinel values
//! - `cooldown = 0s` → throttling disabled (every submission admits)
//! - `bus_capacity` is clamped to a minimum of 1 by the bus

use std::time::Duration;

use crate::catalog::MessageLocale;
use crate::error::ConfigError;

/// Accepted range for [`VoiceConfig::speech_rate`].
pub const SPEECH_RATE_RANGE: (f32, f32) = (0.1, 3.0);
/// Accepted range for [`VoiceConfig::pitch`].
pub const PITCH_RANGE: (f32, f32) = (0.1, 2.0);

/// Global configuration for the dispatcher runtime.
///
/// ## Field semantics
/// - `cooldown`: minimum time between two admitted alerts of the same
///   category (`0s` = no throttling). Mutable later via
///   [`ThrottleRegistry::set_cooldown`](crate::ThrottleRegistry::set_cooldown).
/// - `bus_capacity`: event bus ring buffer size. Slow raw receivers that lag
///   behind more than `bus_capacity` events observe `Lagged` and skip older
///   items (min 1; clamped by the bus).
#[derive(Clone, Debug)]
pub struct DispatchConfig {
    /// Per-category cooldown window (`0s` = always admit).
    pub cooldown: Duration,

    /// Capacity of the event bus broadcast channel ring buffer.
    pub bus_capacity: usize,
}

impl Default for DispatchConfig {
    /// Default configuration:
    ///
    /// - `cooldown = 30s` (one alert per category per half minute)
    /// - `bus_capacity = 1024`
    fn default() -> Self {
        Self {
            cooldown: Duration::from_secs(30),
            bus_capacity: 1024,
        }
    }
}

impl DispatchConfig {
    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

/// Queue behavior the backend applies to non-preempting emissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueMode {
    /// Drop whatever is queued and play the new message next.
    Flush,

    /// Append the new message behind the current queue.
    Add,
}

/// Speech parameters forwarded to the output backend.
///
/// Constructed via [`VoiceConfig::new`], which rejects out-of-range values
/// with a typed [`ConfigError`] instead of panicking deep in a call chain.
/// The dispatch core never interprets these fields; they travel to the
/// backend through [`Backend::configure`](crate::Backend::configure).
#[derive(Clone, Debug, PartialEq)]
pub struct VoiceConfig {
    /// Speech rate multiplier, `0.1..=3.0` (1.0 = normal).
    pub speech_rate: f32,

    /// Voice pitch multiplier, `0.1..=2.0` (1.0 = normal).
    pub pitch: f32,

    /// Language of predefined catalog messages.
    pub locale: MessageLocale,

    /// Master switch; a disabled backend may ignore emissions entirely.
    pub enabled: bool,

    /// Queue behavior for non-preempting emissions.
    pub queue_mode: QueueMode,
}

impl VoiceConfig {
    /// Validates and builds a voice configuration.
    ///
    /// # Errors
    /// - [`ConfigError::SpeechRateOutOfRange`] if `speech_rate ∉ 0.1..=3.0`
    /// - [`ConfigError::PitchOutOfRange`] if `pitch ∉ 0.1..=2.0`
    pub fn new(
        speech_rate: f32,
        pitch: f32,
        locale: MessageLocale,
        enabled: bool,
        queue_mode: QueueMode,
    ) -> Result<Self, ConfigError> {
        let (rate_min, rate_max) = SPEECH_RATE_RANGE;
        if !(rate_min..=rate_max).contains(&speech_rate) {
            return Err(ConfigError::SpeechRateOutOfRange { value: speech_rate });
        }
        let (pitch_min, pitch_max) = PITCH_RANGE;
        if !(pitch_min..=pitch_max).contains(&pitch) {
            return Err(ConfigError::PitchOutOfRange { value: pitch });
        }
        Ok(Self {
            speech_rate,
            pitch,
            locale,
            enabled,
            queue_mode,
        })
    }
}

impl Default for VoiceConfig {
    /// Default configuration: normal rate and pitch, Spanish messages,
    /// enabled, flush queue mode.
    fn default() -> Self {
        Self {
            speech_rate: 1.0,
            pitch: 1.0,
            locale: MessageLocale::Spanish,
            enabled: true,
            queue_mode: QueueMode::Flush,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_config_accepts_range_bounds() {
        assert!(VoiceConfig::new(0.1, 0.1, MessageLocale::English, true, QueueMode::Add).is_ok());
        assert!(VoiceConfig::new(3.0, 2.0, MessageLocale::English, true, QueueMode::Add).is_ok());
    }

    #[test]
    fn test_voice_config_rejects_bad_rate() {
        let err = VoiceConfig::new(3.5, 1.0, MessageLocale::Spanish, true, QueueMode::Flush)
            .unwrap_err();
        assert!(matches!(err, ConfigError::SpeechRateOutOfRange { .. }));

        let err = VoiceConfig::new(0.0, 1.0, MessageLocale::Spanish, true, QueueMode::Flush)
            .unwrap_err();
        assert!(matches!(err, ConfigError::SpeechRateOutOfRange { .. }));
    }

    #[test]
    fn test_voice_config_rejects_bad_pitch() {
        let err = VoiceConfig::new(1.0, 2.5, MessageLocale::Spanish, true, QueueMode::Flush)
            .unwrap_err();
        assert!(matches!(err, ConfigError::PitchOutOfRange { .. }));
    }

    #[test]
    fn test_dispatch_config_defaults() {
        let cfg = DispatchConfig::default();
        assert_eq!(cfg.cooldown, Duration::from_secs(30));
        assert_eq!(cfg.bus_capacity_clamped(), 1024);

        let zero = DispatchConfig {
            bus_capacity: 0,
            ..cfg
        };
        assert_eq!(zero.bus_capacity_clamped(), 1);
    }
}
