//! Notification sink used by the workflows to report outcomes to the operator.
//!
//! Delivery is fire-and-forget: workflows never inspect what the sink does
//! with a notification.

use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

impl std::fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationLevel::Info => write!(f, "info"),
            NotificationLevel::Success => write!(f, "success"),
            NotificationLevel::Error => write!(f, "error"),
        }
    }
}

/// A transient message for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    /// Secondary text shown alongside the message, e.g. the server reply.
    pub detail: Option<String>,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
            detail: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
            detail: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Sink that keeps every notification in memory, in delivery order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far.
    pub fn received(&self) -> Vec<Notification> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn levels(&self) -> Vec<NotificationLevel> {
        self.received().iter().map(|n| n.level).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_notifier_keeps_delivery_order() {
        let sink = RecordingNotifier::new();
        sink.notify(Notification::success("first"));
        sink.notify(Notification::error("second").with_detail("why"));

        let received = sink.received();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0].message, "first");
        assert_eq!(received[1].detail.as_deref(), Some("why"));
        assert_eq!(
            sink.levels(),
            vec![NotificationLevel::Success, NotificationLevel::Error]
        );
    }

    #[test]
    fn level_display_is_lowercase() {
        assert_eq!(NotificationLevel::Info.to_string(), "info");
        assert_eq!(NotificationLevel::Success.to_string(), "success");
        assert_eq!(NotificationLevel::Error.to_string(), "error");
    }
}
