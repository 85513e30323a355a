//! Domain notifications and the unread badge rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ports::NotificationStore;
use crate::session::SessionSnapshot;

/// A notification addressed to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier.
    pub id: i64,
    /// Email of the recipient.
    pub recipient_email: String,
    /// Message text.
    pub message: String,
    /// Whether the recipient has read it.
    pub is_read: bool,
    /// Timestamp.
    pub created_at: DateTime<Utc>,
}

/// Returns the badge count to render, if any.
///
/// The store is queried on every call. A badge is shown only for a
/// logged-in session with at least one unread notification.
pub fn unread_badge(session: &SessionSnapshot, store: &dyn NotificationStore) -> Option<u32> {
    if !session.is_logged_in() {
        return None;
    }

    match store.unread_count_for(session.user_email()) {
        0 => None,
        count => Some(count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryNotificationStore;

    #[test]
    fn test_no_badge_when_nothing_unread() {
        let store = MemoryNotificationStore::new();
        let session = SessionSnapshot::logged_in("a@b.com");
        assert_eq!(unread_badge(&session, &store), None);
    }

    #[test]
    fn test_badge_shows_unread_count() {
        let store = MemoryNotificationStore::new();
        for i in 0..4 {
            store.push("a@b.com", format!("message {i}"));
        }
        store.push("other@b.com", "not yours");

        let session = SessionSnapshot::logged_in("a@b.com");
        assert_eq!(unread_badge(&session, &store), Some(4));
    }

    #[test]
    fn test_no_badge_when_logged_out() {
        let store = MemoryNotificationStore::new();
        store.push("a@b.com", "hello");
        assert_eq!(unread_badge(&SessionSnapshot::logged_out(), &store), None);
    }

    #[test]
    fn test_read_notifications_do_not_count() {
        let store = MemoryNotificationStore::new();
        store.push("a@b.com", "one");
        store.push("a@b.com", "two");
        store.mark_all_read("a@b.com");
        store.push("a@b.com", "three");

        let session = SessionSnapshot::logged_in("a@b.com");
        assert_eq!(unread_badge(&session, &store), Some(1));
    }
}
