//! Notification types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long a toast stays visible before auto-dismissing.
pub const DISMISS_AFTER: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Failure,
}

/// A transient user-visible message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub dismiss_after: Duration,
}

impl Notification {
    fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at: Utc::now(),
            dismiss_after: DISMISS_AFTER,
        }
    }

    /// Creates a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    /// Creates a failure toast.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Failure, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind_and_dismiss_interval() {
        let success = Notification::success("Meta criada com sucesso.");
        assert_eq!(success.kind, NotificationKind::Success);
        assert_eq!(success.dismiss_after, DISMISS_AFTER);

        let failure = Notification::failure("Não foi possível criar sua meta.");
        assert_eq!(failure.kind, NotificationKind::Failure);
        assert_eq!(failure.message, "Não foi possível criar sua meta.");
    }
}
