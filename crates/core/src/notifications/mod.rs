//! User-visible notifications.
//!
//! Core services emit transient notifications (toasts) through the sink
//! trait after mutations; front-ends implement the sink to render them.

mod notification;
mod sink;

pub use notification::{Notification, NotificationKind, DISMISS_AFTER};
pub use sink::{MockNotificationSink, NoOpNotificationSink, NotificationSink};
