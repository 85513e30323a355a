//! In-memory implementations of the sidebar ports.
//!
//! Used by tests and previews. All types are `Send + Sync` and cheap to
//! clone; clones share state.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, RwLock};

use chrono::Utc;

use crate::notification::Notification;
use crate::ports::{AuthStore, Navigator, NotificationStore, Toaster};
use crate::session::SessionSnapshot;
use crate::toast::Toast;

#[derive(Debug, Default)]
struct AuthState {
    email: Option<String>,
    admins: HashSet<String>,
    blocked: HashSet<String>,
}

/// Authentication store holding the session in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryAuthStore {
    state: Arc<RwLock<AuthState>>,
}

impl MemoryAuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `email` as an administrator.
    pub fn with_admin(self, email: impl Into<String>) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.admins.insert(email.into());
        }
        self
    }

    /// Marks `email` as blocked from posting.
    pub fn with_blocked(self, email: impl Into<String>) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.blocked.insert(email.into());
        }
        self
    }
}

impl AuthStore for MemoryAuthStore {
    fn snapshot(&self) -> SessionSnapshot {
        let Ok(state) = self.state.read() else {
            return SessionSnapshot::logged_out();
        };

        match state.email.as_deref() {
            Some(email) => SessionSnapshot::logged_in(email)
                .with_admin(state.admins.contains(email))
                .with_blocked(state.blocked.contains(email)),
            None => SessionSnapshot::logged_out(),
        }
    }

    fn login(&self, email: &str) {
        if let Ok(mut state) = self.state.write() {
            state.email = Some(email.to_string());
        }
    }

    fn logout(&self) {
        if let Ok(mut state) = self.state.write() {
            state.email = None;
        }
    }
}

/// Notification store holding notifications in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotificationStore {
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl MemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an unread notification for `recipient`.
    pub fn push(&self, recipient: impl Into<String>, message: impl Into<String>) {
        if let Ok(mut notifications) = self.notifications.write() {
            let id = notifications.len() as i64 + 1;
            notifications.push(Notification {
                id,
                recipient_email: recipient.into(),
                message: message.into(),
                is_read: false,
                created_at: Utc::now(),
            });
        }
    }
}

impl NotificationStore for MemoryNotificationStore {
    fn unread_count_for(&self, email: Option<&str>) -> u32 {
        let Some(email) = email else {
            return 0;
        };

        self.notifications
            .read()
            .map(|all| {
                all.iter()
                    .filter(|n| n.recipient_email == email && !n.is_read)
                    .count() as u32
            })
            .unwrap_or(0)
    }

    fn notifications_for(&self, email: &str) -> Vec<Notification> {
        self.notifications
            .read()
            .map(|all| {
                all.iter()
                    .rev()
                    .filter(|n| n.recipient_email == email)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn mark_all_read(&self, email: &str) {
        if let Ok(mut all) = self.notifications.write() {
            all.iter_mut()
                .filter(|n| n.recipient_email == email)
                .for_each(|n| n.is_read = true);
        }
    }
}

/// Navigator that records every path it is asked to visit.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    history: Arc<Mutex<Vec<String>>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths visited so far, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.lock().map(|h| h.clone()).unwrap_or_default()
    }
}

impl Navigator for MemoryNavigator {
    fn navigate_to(&self, path: &str) {
        if let Ok(mut history) = self.history.lock() {
            history.push(path.to_string());
        }
    }
}

/// Toaster that records every toast instead of displaying it.
#[derive(Debug, Clone, Default)]
pub struct MemoryToaster {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl MemoryToaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toasts shown so far, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

impl Toaster for MemoryToaster {
    fn notify(&self, toast: Toast) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast);
        }
    }
}
