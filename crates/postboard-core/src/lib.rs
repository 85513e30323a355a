//! Postboard Core - Session model, navigation rules, and sidebar state.
//!
//! This crate holds everything about the navigation sidebar that can be
//! expressed without a renderer:
//!
//! - The session snapshot published by an authentication store
//! - The navigation link table and its visibility rules
//! - The sidebar state machine (panel, login form, email draft)
//! - Transient notification (toast) models
//! - The ports the sidebar talks to (auth, notifications, navigation, toasts)
//! - Application configuration
//!
//! # Example
//!
//! ```
//! use postboard_core::memory::{MemoryAuthStore, MemoryToaster};
//! use postboard_core::sidebar::{SidebarSettings, SidebarState};
//! use postboard_core::ports::AuthStore;
//!
//! let auth = MemoryAuthStore::new();
//! let toaster = MemoryToaster::new();
//! let settings = SidebarSettings::default();
//!
//! let mut sidebar = SidebarState::new();
//! sidebar.show_login_form();
//! sidebar.set_email_input("reader@example.com");
//! sidebar.submit_login(&auth, &toaster, &settings);
//!
//! assert!(auth.snapshot().is_logged_in());
//! assert!(!sidebar.is_login_form_visible());
//! ```

pub mod config;
pub mod error;
pub mod memory;
pub mod nav;
pub mod notification;
pub mod ports;
pub mod session;
pub mod sidebar;
pub mod toast;

pub use config::{AppConfig, ToastSettings};
pub use error::{CoreError, Result};
pub use nav::NavLink;
pub use notification::Notification;
pub use ports::{AuthStore, Navigator, NotificationStore, Toaster};
pub use session::SessionSnapshot;
pub use sidebar::{LoginOutcome, PanelState, PressTarget, SidebarSettings, SidebarState};
pub use toast::{Toast, ToastLevel, ToastOptions, ToastPosition, ToastQueue};
