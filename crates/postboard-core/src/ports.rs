//! Collaborators the sidebar talks to.
//!
//! Implementations are injected rather than reached through globals: the
//! desktop app wires SQLite-backed stores and router/toast adapters, tests
//! wire the in-memory versions from [`crate::memory`].
//!
//! Command methods do not return errors. Implementations log their own
//! failures and carry on.

use crate::notification::Notification;
use crate::session::SessionSnapshot;
use crate::toast::{Toast, ToastLevel, ToastOptions};

/// Authentication store.
pub trait AuthStore {
    /// Returns the current session.
    fn snapshot(&self) -> SessionSnapshot;

    /// Logs in as `email`.
    fn login(&self, email: &str);

    /// Clears the session.
    fn logout(&self);
}

/// Notification store.
pub trait NotificationStore {
    /// Number of unread notifications for `email`. `None` yields 0.
    fn unread_count_for(&self, email: Option<&str>) -> u32;

    /// All notifications for `email`, newest first.
    fn notifications_for(&self, email: &str) -> Vec<Notification>;

    /// Marks every notification for `email` as read.
    fn mark_all_read(&self, email: &str);
}

/// Client-side router.
pub trait Navigator {
    /// Navigates to `path` without a full reload.
    fn navigate_to(&self, path: &str);
}

/// Transient-notification service.
pub trait Toaster {
    /// Shows a toast. Fire-and-forget.
    fn notify(&self, toast: Toast);

    fn notify_success(&self, message: &str, options: ToastOptions) {
        self.notify(Toast::new(ToastLevel::Success, message, options));
    }

    fn notify_info(&self, message: &str, options: ToastOptions) {
        self.notify(Toast::new(ToastLevel::Info, message, options));
    }
}
