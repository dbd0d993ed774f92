//! Single-slot notification state.
//!
//! Holds at most one notification. Every `show` supersedes the previous
//! message and hands back a [`NoticeId`]; dismissal is keyed by that id, so a
//! timer scheduled for an older message can never clear a newer one.

use crate::models::{NoticeId, Notification, Severity};

#[derive(Clone, Debug, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current notification. `now` is in milliseconds.
    pub fn show(&mut self, text: impl Into<String>, severity: Severity, now: f64) -> NoticeId {
        self.next_id += 1;
        let id = NoticeId(self.next_id);
        self.current = Some(Notification {
            id,
            text: text.into(),
            severity,
            created_at: now,
        });
        id
    }

    pub fn info(&mut self, text: impl Into<String>, now: f64) -> NoticeId {
        self.show(text, Severity::Info, now)
    }

    pub fn success(&mut self, text: impl Into<String>, now: f64) -> NoticeId {
        self.show(text, Severity::Success, now)
    }

    pub fn error(&mut self, text: impl Into<String>, now: f64) -> NoticeId {
        self.show(text, Severity::Error, now)
    }

    /// Clear the notification if it is still the one identified by `id`.
    ///
    /// Returns `true` if something was cleared.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Clear the notification if its lifetime has elapsed at `now`.
    pub fn expire(&mut self, now: f64) -> bool {
        if self.current.as_ref().is_some_and(|n| now >= n.expires_at()) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Text of the current notification, empty when nothing is shown.
    #[cfg(test)]
    pub fn text(&self) -> &str {
        self.current.as_ref().map_or("", |n| n.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let center = NotificationCenter::new();
        assert!(center.current().is_none());
        assert_eq!(center.text(), "");
    }

    #[test]
    fn test_show_replaces_current() {
        let mut center = NotificationCenter::new();
        center.info("first", 0.0);
        center.error("second", 10.0);

        let current = center.current().unwrap();
        assert_eq!(current.text, "second");
        assert_eq!(current.severity, Severity::Error);
    }

    #[test]
    fn test_expires_after_five_seconds() {
        let mut center = NotificationCenter::new();
        center.success("saved", 1_000.0);

        assert!(!center.expire(5_999.0));
        assert_eq!(center.text(), "saved");
        assert!(center.expire(6_000.0));
        assert!(center.current().is_none());
    }

    #[test]
    fn test_replacement_is_not_cleared_by_original_timer() {
        let mut center = NotificationCenter::new();
        let first = center.info("first", 0.0);
        let second = center.info("second", 2_000.0);
        assert_eq!(center.text(), "second");

        // The original's timer fires at T+5s.
        assert!(!center.dismiss(first));
        assert!(!center.expire(5_000.0));
        assert_eq!(center.text(), "second");

        // The replacement's own lifetime runs from its own `show`.
        assert!(center.expire(7_000.0));
        assert!(!center.dismiss(second));
    }

    #[test]
    fn test_dismiss_current() {
        let mut center = NotificationCenter::new();
        let id = center.info("hello", 0.0);
        assert!(center.dismiss(id));
        assert!(center.current().is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut center = NotificationCenter::new();
        let a = center.info("a", 0.0);
        let b = center.info("a", 0.0);
        assert_ne!(a, b);
    }
}
