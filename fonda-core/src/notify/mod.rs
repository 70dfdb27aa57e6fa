//! Operator notifications
//!
//! Catalog operations report their outcome as a [`Notice`]. Rendering is up
//! to whoever implements [`Notifier`].

use parking_lot::Mutex;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// Toast-style message: title, body, severity and how long to show it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub severity: Severity,
    /// Display hint
    pub duration: Duration,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Success,
            duration,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Error,
            duration,
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Writes notices to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Error => tracing::error!(title = %notice.title, "{}", notice.message),
            Severity::Success => tracing::info!(title = %notice.title, "{}", notice.message),
        }
    }
}

/// Keeps notices until drained
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything received so far
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    /// Remove and return everything received so far
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock())
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().last().cloned()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}
