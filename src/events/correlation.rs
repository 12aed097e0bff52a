//! # Correlation ids: linking a submission to its lifecycle events.
//!
//! A [`CorrelationId`] is an opaque identifier minted by the dispatcher when
//! a submission is accepted, returned to the producer synchronously, and
//! echoed back by the backend in every lifecycle callback.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::alerts::Category;

/// Opaque identifier linking a submitted alert to its later lifecycle events.
///
/// The rendered form is `{category_label}-{uuid}`, which keeps logs greppable
/// by category, but consumers must treat the whole id as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(Arc<str>);

impl CorrelationId {
    /// Mints a fresh id for an alert of the given category.
    pub fn next(category: &Category) -> Self {
        Self(format!("{}-{}", category.as_label(), Uuid::new_v4()).into())
    }

    /// Wraps an id received from an external collaborator.
    pub fn from_raw(raw: impl Into<Arc<str>>) -> Self {
        Self(raw.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = CorrelationId::next(&Category::SpeedExcess);
        let b = CorrelationId::next(&Category::SpeedExcess);
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_carries_category_label() {
        let id = CorrelationId::next(&Category::HarshBraking);
        assert!(id.as_str().starts_with("harsh_braking-"));
    }

    #[test]
    fn test_raw_round_trip() {
        let id = CorrelationId::from_raw("external-42");
        assert_eq!(id.as_str(), "external-42");
        assert_eq!(id, CorrelationId::from_raw("external-42"));
    }
}
