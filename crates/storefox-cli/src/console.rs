use std::io::Write;

use storefox_core::{Notification, NotificationLevel, Notifier};

/// Prints notifications to the terminal: errors to stderr, everything else
/// to stdout.
pub(crate) struct ConsoleNotifier;

impl ConsoleNotifier {
    pub(crate) fn render(notification: &Notification) -> String {
        let mut line = format!("[{}] {}", notification.level, notification.message);
        if let Some(detail) = notification.detail.as_deref().filter(|d| !d.is_empty()) {
            line.push_str("\n    ");
            line.push_str(detail);
        }
        line
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let line = Self::render(&notification);
        // A closed pipe must not abort the workflow, so write errors are dropped.
        let _ = match notification.level {
            NotificationLevel::Error => writeln!(std::io::stderr(), "{line}"),
            NotificationLevel::Info | NotificationLevel::Success => {
                writeln!(std::io::stdout(), "{line}")
            }
        };
    }
}
