//! Postboard UI - Navigation sidebar and page shell.
//!
//! This crate renders the Postboard desktop window with Dioxus:
//!
//! - A collapsible sidebar that closes on outside presses
//! - An inline login form backed by the authentication store
//! - Navigation links filtered by login, admin, and blocked status
//! - An unread notification badge on the notifications link
//! - Transient toasts for login and logout
//!
//! # Usage
//!
//! ```no_run
//! # #[cfg(feature = "desktop")]
//! # {
//! use postboard_core::AppConfig;
//! use postboard_storage::Database;
//! use postboard_ui::{run_app, AppServices};
//!
//! let db = Database::new().expect("Failed to open database");
//! let services = AppServices::from_database(db, &AppConfig::default())
//!     .expect("Failed to create services");
//!
//! run_app(services);
//! # }
//! ```

mod app;
pub mod components;
pub mod error;
pub mod routes;
pub mod state;
pub mod theme;
pub mod views;

pub use app::App;
pub use error::{Result, UiError};
pub use routes::Route;
pub use state::AppServices;

/// Runs the desktop application. Blocks until the window is closed.
#[cfg(feature = "desktop")]
pub fn run_app(services: AppServices) {
    use dioxus::desktop::{Config, WindowBuilder};

    tracing::info!("Launching Postboard window");

    let window = WindowBuilder::new()
        .with_title("Postboard")
        .with_inner_size(dioxus::desktop::LogicalSize::new(1000.0, 700.0));

    LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .with_context(services)
        .launch(App);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dioxus::prelude::*;
    use postboard_core::memory::{MemoryAuthStore, MemoryNotificationStore};
    use postboard_core::{AppConfig, AuthStore, SidebarSettings};
    use postboard_storage::Database;

    use super::*;

    #[test]
    fn test_services_from_database_seed_admins() {
        let db = Database::in_memory().unwrap();
        let config = AppConfig {
            admin_emails: vec!["root@b.com".to_string()],
            ..AppConfig::default()
        };

        let services = AppServices::from_database(db.clone(), &config).unwrap();
        services.auth.login("root@b.com");

        assert!(services.auth.snapshot().is_admin());
        assert!(db.get_user("root@b.com").unwrap().unwrap().is_admin);
    }

    #[test]
    fn test_services_carry_sidebar_settings() {
        let db = Database::in_memory().unwrap();
        let config = AppConfig::default();

        let services = AppServices::from_database(db, &config).unwrap();
        assert_eq!(services.settings, config.sidebar_settings());
    }

    #[component]
    fn ProfileHarness() -> Element {
        let services = state::use_services();
        state::use_app_state_provider(&services);

        rsx! { views::profile::Profile {} }
    }

    #[test]
    fn test_profile_page_shows_session() {
        let auth = MemoryAuthStore::new().with_admin("root@b.com");
        auth.login("root@b.com");
        let services = AppServices::new(
            Arc::new(auth),
            Arc::new(MemoryNotificationStore::new()),
            SidebarSettings::default(),
        );

        let mut vdom = VirtualDom::new(ProfileHarness).with_root_context(services);
        vdom.rebuild_in_place();
        let html = dioxus_ssr::render(&vdom);

        assert!(html.contains("root@b.com"));
        assert!(html.contains("Administrator"));
    }
}
