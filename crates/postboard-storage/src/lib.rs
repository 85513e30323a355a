//! Postboard Storage - SQLite persistence layer.
//!
//! This crate persists what the sidebar reads through its stores:
//!
//! - The logged-in session (survives restarts)
//! - User roles (admin, blocked)
//! - Notifications and their read state
//!
//! # Example
//!
//! ```no_run
//! use postboard_core::AuthStore;
//! use postboard_storage::{Database, SqliteAuthStore};
//!
//! let db = Database::in_memory().unwrap();
//! db.seed_admins(&["admin@example.com".to_string()]).unwrap();
//!
//! let auth = SqliteAuthStore::new(db.clone());
//! auth.login("admin@example.com");
//! assert!(auth.snapshot().is_admin());
//! ```

mod database;
pub mod error;
pub mod models;
pub mod repository;
mod schema;
pub mod stores;

pub use database::Database;
pub use error::{Result, StorageError};
pub use models::{Notification, User};
pub use stores::{SqliteAuthStore, SqliteNotificationStore};
