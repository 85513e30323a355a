//! SQLite-backed implementations of the sidebar stores.
//!
//! Port methods cannot fail, so database errors are logged and replaced
//! with a neutral value (logged out, zero unread, empty list).

use postboard_core::{AuthStore, Notification, NotificationStore, SessionSnapshot};
use tracing::warn;

use crate::database::Database;

/// Authentication store persisting the session in SQLite.
#[derive(Clone)]
pub struct SqliteAuthStore {
    db: Database,
}

impl SqliteAuthStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl AuthStore for SqliteAuthStore {
    fn snapshot(&self) -> SessionSnapshot {
        self.db.session_snapshot().unwrap_or_else(|e| {
            warn!("Failed to read session: {}", e);
            SessionSnapshot::logged_out()
        })
    }

    fn login(&self, email: &str) {
        if let Err(e) = self.db.login(email) {
            warn!("Failed to log in {}: {}", email, e);
        }
    }

    fn logout(&self) {
        if let Err(e) = self.db.logout() {
            warn!("Failed to log out: {}", e);
        }
    }
}

/// Notification store reading notifications from SQLite.
#[derive(Clone)]
pub struct SqliteNotificationStore {
    db: Database,
}

impl SqliteNotificationStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl NotificationStore for SqliteNotificationStore {
    fn unread_count_for(&self, email: Option<&str>) -> u32 {
        let Some(email) = email else {
            return 0;
        };

        match self.db.count_unread(email) {
            Ok(count) => u32::try_from(count).unwrap_or(u32::MAX),
            Err(e) => {
                warn!("Failed to count unread notifications: {}", e);
                0
            }
        }
    }

    fn notifications_for(&self, email: &str) -> Vec<Notification> {
        self.db.get_notifications(email).unwrap_or_else(|e| {
            warn!("Failed to load notifications: {}", e);
            Vec::new()
        })
    }

    fn mark_all_read(&self, email: &str) {
        if let Err(e) = self.db.mark_all_read(email) {
            warn!("Failed to mark notifications read: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_core::memory::{MemoryNavigator, MemoryToaster};
    use postboard_core::notification::unread_badge;
    use postboard_core::{NavLink, SidebarSettings, SidebarState};

    #[test]
    fn test_sidebar_login_persists_session() {
        let db = Database::in_memory().unwrap();
        let auth = SqliteAuthStore::new(db.clone());
        let toaster = MemoryToaster::new();

        let mut sidebar = SidebarState::new();
        sidebar.show_login_form();
        sidebar.set_email_input("a@b.com");
        sidebar.submit_login(&auth, &toaster, &SidebarSettings::default());

        assert_eq!(db.current_user().unwrap().unwrap().email, "a@b.com");
        assert!(auth.snapshot().is_logged_in());
    }

    #[test]
    fn test_sidebar_logout_clears_session() {
        let db = Database::in_memory().unwrap();
        let auth = SqliteAuthStore::new(db.clone());
        auth.login("a@b.com");

        let navigator = MemoryNavigator::new();
        let toaster = MemoryToaster::new();
        SidebarState::new().logout(&auth, &navigator, &toaster, &SidebarSettings::default());

        assert!(db.current_user().unwrap().is_none());
        assert_eq!(navigator.history(), vec!["/"]);
    }

    #[test]
    fn test_admin_link_for_seeded_admin() {
        let db = Database::in_memory().unwrap();
        db.seed_admins(&["root@b.com".to_string()]).unwrap();
        let auth = SqliteAuthStore::new(db);

        auth.login("root@b.com");
        assert!(NavLink::AdminPanel.is_visible(&auth.snapshot()));

        auth.login("a@b.com");
        assert!(!NavLink::AdminPanel.is_visible(&auth.snapshot()));
    }

    #[test]
    fn test_badge_from_sqlite_store() {
        let db = Database::in_memory().unwrap();
        let auth = SqliteAuthStore::new(db.clone());
        let store = SqliteNotificationStore::new(db.clone());
        auth.login("a@b.com");

        assert_eq!(unread_badge(&auth.snapshot(), &store), None);

        for i in 0..4 {
            db.add_notification("a@b.com", &format!("message {i}")).unwrap();
        }
        assert_eq!(unread_badge(&auth.snapshot(), &store), Some(4));

        store.mark_all_read("a@b.com");
        assert_eq!(unread_badge(&auth.snapshot(), &store), None);
    }

    #[test]
    fn test_unread_count_for_none() {
        let store = SqliteNotificationStore::new(Database::in_memory().unwrap());
        assert_eq!(store.unread_count_for(None), 0);
    }
}
