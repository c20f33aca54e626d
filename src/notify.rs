//! Toast-style notifications
//!
//! The stores only decide whether an operation succeeded and which message
//! applies; displaying it is up to whatever sink the storefront was given.

use serde::Serialize;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// A message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            severity: Severity::Error,
        }
    }
}

/// Receives notices emitted by a storefront.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Writes notices to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notice: &Notice) {
        match notice.severity {
            Severity::Success => {
                tracing::info!(title = %notice.title, "{}", notice.description)
            }
            Severity::Error => {
                tracing::warn!(title = %notice.title, "{}", notice.description)
            }
        }
    }
}

/// Keeps every notice in memory, oldest first.
#[derive(Debug, Default)]
pub struct MemorySink {
    notices: Mutex<Vec<Notice>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything received so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices().pop()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, notice: &Notice) {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notice.clone());
    }
}
