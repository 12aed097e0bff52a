//! # Alert: an immutable request for one voice emission.
//!
//! An [`Alert`] describes a single candidate emission: the spoken message,
//! its [`Category`] (throttling bucket), its [`Priority`], a capture
//! timestamp, and optional opaque metadata the core never interprets.
//!
//! Alerts are built through [`AlertBuilder`], whose [`AlertBuilder::build`]
//! validates the message instead of panicking:
//!
//! ```rust
//! use voicegate::{Alert, Category, Priority};
//!
//! let alert = Alert::builder(Category::SpeedExcess)
//!     .message("Speed limit exceeded. Please slow down.")
//!     .priority(Priority::High)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(alert.priority(), Priority::High);
//! assert!(Alert::builder(Category::SpeedExcess).message("   ").build().is_err());
//! ```
//!
//! ## Rules
//! - `message` must be non-empty after trimming; `build()` fails otherwise.
//! - An alert is handed to the dispatcher by value and not retained afterward.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

use crate::alerts::{Category, Priority};
use crate::error::DispatchError;

/// Immutable description of one candidate voice emission.
#[derive(Clone)]
pub struct Alert {
    message: String,
    category: Category,
    priority: Priority,
    timestamp: SystemTime,
    metadata: Option<Arc<dyn Any + Send + Sync>>,
}

impl Alert {
    /// Starts building an alert for the given category.
    pub fn builder(category: Category) -> AlertBuilder {
        AlertBuilder {
            category,
            message: String::new(),
            priority: Priority::default(),
            timestamp: None,
            metadata: None,
        }
    }

    /// The spoken message. Guaranteed non-empty after trimming.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The throttling bucket and preemption tag.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// The preemption priority.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Capture time. Used for correlation and ordering, never for the
    /// throttle cooldown math (which uses the wall clock at admission time).
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    /// Opaque metadata, not interpreted by the dispatch core.
    pub fn metadata(&self) -> Option<&Arc<dyn Any + Send + Sync>> {
        self.metadata.as_ref()
    }
}

impl fmt::Debug for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alert")
            .field("category", &self.category)
            .field("priority", &self.priority)
            .field("message", &self.message)
            .field("timestamp", &self.timestamp)
            .field("metadata", &self.metadata.is_some())
            .finish()
    }
}

/// Builder for [`Alert`] with validation at [`AlertBuilder::build`].
///
/// The category is required up-front; priority defaults to
/// [`Priority::Normal`] and the timestamp to the build time.
pub struct AlertBuilder {
    category: Category,
    message: String,
    priority: Priority,
    timestamp: Option<SystemTime>,
    metadata: Option<Arc<dyn Any + Send + Sync>>,
}

impl AlertBuilder {
    /// Sets the spoken message (required).
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the priority (default: [`Priority::Normal`]).
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Overrides the capture timestamp (default: build time).
    pub fn timestamp(mut self, at: SystemTime) -> Self {
        self.timestamp = Some(at);
        self
    }

    /// Attaches opaque metadata.
    pub fn metadata(mut self, metadata: Arc<dyn Any + Send + Sync>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Validates and builds the alert.
    ///
    /// Fails with [`DispatchError::EmptyMessage`] if the message is empty
    /// after trimming.
    pub fn build(self) -> Result<Alert, DispatchError> {
        if self.message.trim().is_empty() {
            return Err(DispatchError::EmptyMessage);
        }
        Ok(Alert {
            message: self.message,
            category: self.category,
            priority: self.priority,
            timestamp: self.timestamp.unwrap_or_else(SystemTime::now),
            metadata: self.metadata,
        })
    }
}
