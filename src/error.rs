//! Error types used by the dispatch core and configuration.
//!
//! This module defines two error enums:
//!
//! - [`DispatchError`] — synchronous rejections returned by
//!   [`Dispatcher::submit`](crate::Dispatcher::submit) and alert validation.
//! - [`ConfigError`] — out-of-range voice parameters rejected at
//!   [`VoiceConfig`](crate::VoiceConfig) construction.
//!
//! Backend-internal emission failures are **not** part of [`DispatchError`]:
//! they surface asynchronously as [`EventKind::Failed`](crate::EventKind)
//! events so producers never block on the emission lifecycle.

use std::time::Duration;
use thiserror::Error;

/// # Errors returned when a submission is rejected.
///
/// All variants are recoverable from the dispatcher's point of view: a
/// rejected submission leaves the throttle registry and the output slot
/// untouched, and never poisons subsequent submissions.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The alert message was empty after trimming.
    #[error("alert message is empty")]
    EmptyMessage,

    /// The category is still inside its cooldown window.
    ///
    /// The producer may retry after `remaining` has elapsed.
    #[error("category throttled; retry in {remaining:?}")]
    Throttled {
        /// Time left before the category admits again.
        remaining: Duration,
    },

    /// The output backend reported itself unavailable.
    ///
    /// Recoverable; the producer should poll
    /// [`Dispatcher::is_available`](crate::Dispatcher::is_available).
    #[error("output backend is not available")]
    BackendUnavailable,
}

impl DispatchError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use voicegate::DispatchError;
    ///
    /// assert_eq!(DispatchError::EmptyMessage.as_label(), "empty_message");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::EmptyMessage => "empty_message",
            DispatchError::Throttled { .. } => "throttled",
            DispatchError::BackendUnavailable => "backend_unavailable",
        }
    }

    /// Indicates whether the rejection is safe to retry later.
    ///
    /// Returns `true` for [`DispatchError::Throttled`] and
    /// [`DispatchError::BackendUnavailable`]; an empty message will never
    /// succeed without being corrected first.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DispatchError::Throttled { .. } | DispatchError::BackendUnavailable
        )
    }
}

/// # Errors produced by voice configuration validation.
///
/// Raised by [`VoiceConfig::new`](crate::VoiceConfig::new) when a speech
/// parameter is out of the range the output backend accepts.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Speech rate outside the accepted `0.1..=3.0` range.
    #[error("speech rate {value} out of range (0.1..=3.0)")]
    SpeechRateOutOfRange {
        /// The rejected value.
        value: f32,
    },

    /// Pitch outside the accepted `0.1..=2.0` range.
    #[error("pitch {value} out of range (0.1..=2.0)")]
    PitchOutOfRange {
        /// The rejected value.
        value: f32,
    },
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::SpeechRateOutOfRange { .. } => "speech_rate_out_of_range",
            ConfigError::PitchOutOfRange { .. } => "pitch_out_of_range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(
            DispatchError::Throttled {
                remaining: Duration::from_secs(1)
            }
            .as_label(),
            "throttled"
        );
        assert_eq!(
            DispatchError::BackendUnavailable.as_label(),
            "backend_unavailable"
        );
    }

    #[test]
    fn test_retryability() {
        assert!(!DispatchError::EmptyMessage.is_retryable());
        assert!(DispatchError::BackendUnavailable.is_retryable());
        assert!(DispatchError::Throttled {
            remaining: Duration::ZERO
        }
        .is_retryable());
    }
}
