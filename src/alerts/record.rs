//! # Serializable alert snapshot for deferred hand-off.
//!
//! [`AlertRecord`] captures the fields a deferred-delivery collaborator needs
//! to reconstruct an alert later: category, message, and priority. Opaque
//! metadata and the capture timestamp are intentionally dropped; a
//! reconstructed alert gets a fresh timestamp at rebuild time.

use serde::{Deserialize, Serialize};

use crate::alerts::{Alert, Category, Priority};
use crate::error::DispatchError;

/// Serializable key/value snapshot of an alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    /// Throttling bucket of the original alert.
    pub category: Category,
    /// Spoken message of the original alert.
    pub message: String,
    /// Priority of the original alert.
    pub priority: Priority,
}

impl AlertRecord {
    /// Rebuilds an [`Alert`] from the snapshot with a fresh timestamp.
    pub fn into_alert(self) -> Result<Alert, DispatchError> {
        Alert::builder(self.category)
            .message(self.message)
            .priority(self.priority)
            .build()
    }
}

impl From<&Alert> for AlertRecord {
    fn from(alert: &Alert) -> Self {
        Self {
            category: alert.category().clone(),
            message: alert.message().to_string(),
            priority: alert.priority(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trip() {
        let alert = Alert::builder(Category::SpeedExcess)
            .message("Slow down.")
            .priority(Priority::High)
            .build()
            .unwrap();

        let record = AlertRecord::from(&alert);
        let json = serde_json::to_string(&record).unwrap();
        let back: AlertRecord = serde_json::from_str(&json).unwrap();
        let rebuilt = back.into_alert().unwrap();

        assert_eq!(rebuilt.category(), alert.category());
        assert_eq!(rebuilt.message(), alert.message());
        assert_eq!(rebuilt.priority(), alert.priority());
    }

    #[test]
    fn test_empty_record_fails_rebuild() {
        let record = AlertRecord {
            category: Category::custom("x"),
            message: "  ".into(),
            priority: Priority::Low,
        };
        assert!(record.into_alert().is_err());
    }
}
