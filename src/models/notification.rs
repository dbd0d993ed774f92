//! User-facing notification types.

use crate::config::NOTIFICATION_TTL_MS;

/// Notification severity, used for styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

/// Identifies one `show` call so its dismissal can't clear a later message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoticeId(pub(crate) u64);

/// A single notification as displayed to the user.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: NoticeId,
    pub text: String,
    pub severity: Severity,
    /// Milliseconds since the epoch at which it was shown.
    pub created_at: f64,
}

impl Notification {
    /// Instant (ms) after which the notification is no longer displayed.
    pub fn expires_at(&self) -> f64 {
        self.created_at + f64::from(NOTIFICATION_TTL_MS)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
