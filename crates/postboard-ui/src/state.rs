//! Shared application state for Dioxus.
//!
//! Stores are injected once at launch as [`AppServices`]. Components never
//! call a store directly for commands; they go through the adapters below,
//! which also refresh the signals the UI renders from.

use std::str::FromStr;
use std::sync::Arc;

use dioxus::prelude::*;
use postboard_core::{
    AppConfig, AuthStore, Navigator, Notification, NotificationStore, SessionSnapshot,
    SidebarSettings, Toast, ToastQueue, Toaster,
};
use postboard_storage::{Database, SqliteAuthStore, SqliteNotificationStore};
use tracing::{debug, warn};

use crate::error::Result;
use crate::routes::Route;

/// Stores and settings shared via Dioxus context.
#[derive(Clone)]
pub struct AppServices {
    /// Authentication store.
    pub auth: Arc<dyn AuthStore + Send + Sync>,
    /// Notification store.
    pub notifications: Arc<dyn NotificationStore + Send + Sync>,
    /// Toast and routing parameters for sidebar commands.
    pub settings: SidebarSettings,
}

impl AppServices {
    /// Creates services from arbitrary store implementations.
    pub fn new(
        auth: Arc<dyn AuthStore + Send + Sync>,
        notifications: Arc<dyn NotificationStore + Send + Sync>,
        settings: SidebarSettings,
    ) -> Self {
        Self {
            auth,
            notifications,
            settings,
        }
    }

    /// Creates SQLite-backed services and seeds configured admins.
    pub fn from_database(db: Database, config: &AppConfig) -> Result<Self> {
        db.seed_admins(&config.admin_emails)?;

        Ok(Self::new(
            Arc::new(SqliteAuthStore::new(db.clone())),
            Arc::new(SqliteNotificationStore::new(db)),
            config.sidebar_settings(),
        ))
    }
}

/// Bumped whenever notifications change, so badges re-query the store.
#[derive(Clone, Copy, PartialEq)]
pub struct NotificationsRevision(pub Signal<u64>);

/// Installs the signals every screen reads. Call once at the app root.
pub fn use_app_state_provider(services: &AppServices) {
    let initial = services.auth.snapshot();
    use_context_provider(move || Signal::new(initial));
    use_context_provider(|| Signal::new(ToastQueue::new()));
    use_context_provider(|| NotificationsRevision(Signal::new(0)));
}

/// Returns the injected services.
pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}

/// Returns the current session signal.
pub fn use_session() -> Signal<SessionSnapshot> {
    use_context::<Signal<SessionSnapshot>>()
}

/// Returns the active toasts.
pub fn use_toasts() -> Signal<ToastQueue> {
    use_context::<Signal<ToastQueue>>()
}

/// Returns the notifications revision counter.
pub fn use_notifications_revision() -> NotificationsRevision {
    use_context::<NotificationsRevision>()
}

/// Auth store wrapper that republishes the snapshot after each command.
pub struct ReactiveAuth {
    inner: Arc<dyn AuthStore + Send + Sync>,
    session: Signal<SessionSnapshot>,
}

impl ReactiveAuth {
    pub fn new(inner: Arc<dyn AuthStore + Send + Sync>, session: Signal<SessionSnapshot>) -> Self {
        Self { inner, session }
    }

    fn refresh(&self) {
        let mut session = self.session;
        session.set(self.inner.snapshot());
    }
}

impl AuthStore for ReactiveAuth {
    fn snapshot(&self) -> SessionSnapshot {
        self.inner.snapshot()
    }

    fn login(&self, email: &str) {
        self.inner.login(email);
        self.refresh();
    }

    fn logout(&self) {
        self.inner.logout();
        self.refresh();
    }
}

/// Notification store wrapper that bumps the revision after writes.
pub struct ReactiveNotifications {
    inner: Arc<dyn NotificationStore + Send + Sync>,
    revision: NotificationsRevision,
}

impl ReactiveNotifications {
    pub fn new(
        inner: Arc<dyn NotificationStore + Send + Sync>,
        revision: NotificationsRevision,
    ) -> Self {
        Self { inner, revision }
    }
}

impl NotificationStore for ReactiveNotifications {
    fn unread_count_for(&self, email: Option<&str>) -> u32 {
        self.inner.unread_count_for(email)
    }

    fn notifications_for(&self, email: &str) -> Vec<Notification> {
        self.inner.notifications_for(email)
    }

    fn mark_all_read(&self, email: &str) {
        self.inner.mark_all_read(email);
        let mut revision = self.revision.0;
        revision += 1;
    }
}

/// Navigator backed by the Dioxus router.
pub struct RouterNavigator {
    router: dioxus::router::prelude::Navigator,
}

impl RouterNavigator {
    /// Captures the router navigator. Call during render.
    pub fn new(router: dioxus::router::prelude::Navigator) -> Self {
        Self { router }
    }
}

impl Navigator for RouterNavigator {
    fn navigate_to(&self, path: &str) {
        match Route::from_str(path) {
            Ok(route) => {
                debug!("Navigating to {}", path);
                self.router.push(route);
            }
            Err(e) => warn!("Cannot navigate to {}: {}", path, e),
        }
    }
}

/// Toaster that shows toasts through the [`ToastQueue`] signal.
///
/// Auto-close timers are owned by the rendered toast, not by the caller, so
/// a toast outlives the component that emitted it.
pub struct SignalToaster {
    queue: Signal<ToastQueue>,
}

impl SignalToaster {
    pub fn new(queue: Signal<ToastQueue>) -> Self {
        Self { queue }
    }
}

impl Toaster for SignalToaster {
    fn notify(&self, toast: Toast) {
        let mut queue = self.queue;
        let id = queue.write().push(toast);
        debug!(id, "Toast queued");
    }
}
