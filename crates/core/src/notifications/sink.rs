//! Notification sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::Notification;

/// Trait for receiving user-visible notifications.
///
/// Front-ends implement this to render toasts. `notify()` must be fast and
/// best-effort: a sink failure must never affect the mutation that emitted
/// the notification.
pub trait NotificationSink: Send + Sync {
    /// Emit a single notification.
    fn notify(&self, notification: Notification);
}

/// No-op implementation for contexts that don't render notifications.
#[derive(Clone, Default)]
pub struct NoOpNotificationSink;

impl NotificationSink for NoOpNotificationSink {
    fn notify(&self, _notification: Notification) {
        // Intentionally empty - notifications are discarded
    }
}

/// Mock sink for testing - collects emitted notifications.
#[derive(Clone, Default)]
pub struct MockNotificationSink {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl MockNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected notifications.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    /// Clears collected notifications.
    pub fn clear(&self) {
        self.notifications.lock().unwrap().clear();
    }

    /// Returns the number of collected notifications.
    pub fn len(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }

    /// Returns true if no notifications have been collected.
    pub fn is_empty(&self) -> bool {
        self.notifications.lock().unwrap().is_empty()
    }
}

impl NotificationSink for MockNotificationSink {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}
