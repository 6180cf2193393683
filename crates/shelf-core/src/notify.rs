//! Notification collaborator.
//!
//! The store reports what happened (entry added, load failed, ...) through a
//! [`Notifier`]. Delivery is fire-and-forget; nothing is returned.

use std::cell::RefCell;
use std::rc::Rc;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Receiver for user-facing notices.
pub trait Notifier {
    fn notify(&self, kind: NoticeKind, title: &str, message: &str);
}

/// Forwards notices to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NoticeKind, title: &str, message: &str) {
        match kind {
            NoticeKind::Info => tracing::info!(title, message, "notice"),
            NoticeKind::Error => tracing::error!(title, message, "notice"),
        }
    }
}

/// A notice captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

/// Keeps every notice in memory. Clones share the same log, so a caller can
/// hand one clone to the store and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Rc<RefCell<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.log.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, title: &str, message: &str) {
        self.log.borrow_mut().push(Notice {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
