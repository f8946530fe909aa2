//! User-facing notification capability.
//!
//! Every mutation outcome and fetch failure is surfaced through a
//! [`Notifier`], keeping the synchronization logic free of any UI concern.
//! A front end plugs in its own implementation (toast widget, status bar);
//! this module ships a log-backed one and an in-memory buffering one.

use chrono::{DateTime, Utc};
use log::*;
use std::sync::{Arc, Mutex};

/// Severity of a user-facing notification.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A single user-facing notification.
///
#[derive(Clone, Debug)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Capability for surfacing operation outcomes to the user.
///
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that forwards notices to the log.
///
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }
}

/// Notifier that buffers timestamped notices in memory for a front end to
/// drain. Clones share the same buffer.
///
#[derive(Clone, Default)]
pub struct MemoryNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl MemoryNotifier {
    pub fn new() -> MemoryNotifier {
        MemoryNotifier::default()
    }

    fn push(&self, severity: Severity, message: &str) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(Notice {
                severity,
                message: message.to_string(),
                at: Utc::now(),
            });
        }
        // If the lock is poisoned the notice is lost; the handler already
        // logged the underlying outcome.
    }

    /// Remove and return all buffered notices, oldest first.
    ///
    pub fn drain(&self) -> Vec<Notice> {
        match self.notices.lock() {
            Ok(mut notices) => notices.drain(..).collect(),
            Err(_) => vec![],
        }
    }
}

impl Notifier for MemoryNotifier {
    fn success(&self, message: &str) {
        self.push(Severity::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(Severity::Error, message);
    }
}
