//! Terminal rendering of transient notifications.

use weekgoals_core::notifications::{Notification, NotificationKind, NotificationSink};

/// Prints notifications as one-line toasts. The terminal scrolls them away on
/// its own, so the dismiss interval is not enforced here.
pub struct TerminalNotificationSink;

impl NotificationSink for TerminalNotificationSink {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => println!("✔ {}", notification.message),
            NotificationKind::Failure => eprintln!("✖ {}", notification.message),
        }
    }
}
