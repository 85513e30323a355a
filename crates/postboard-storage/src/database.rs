//! High-level database interface.
//!
//! One SQLite connection behind a mutex, shared by every clone of
//! [`Database`]. Store calls come from the UI thread and are short, so
//! there is no pool.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use directories::ProjectDirs;
use postboard_core::SessionSnapshot;
use rusqlite::Connection;
use tracing::info;

use crate::error::{Result, StorageError};
use crate::models::{Notification, User};
use crate::repository::{NotificationsRepo, SessionRepo, UsersRepo};
use crate::schema::run_migrations;

/// High-level database interface for Postboard.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open the database in the default app data directory.
    pub fn new() -> Result<Self> {
        Self::with_path(Self::default_db_path()?)
    }

    /// Open (or create) the database at a specific path.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        info!("Opening database at: {:?}", path);
        let conn = Connection::open(&path)?;
        conn.execute_batch("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;")?;

        Self::from_connection(conn)
    }

    /// Create an in-memory database (for testing).
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Get the default database path.
    pub fn default_db_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("com", "postboard", "postboard").ok_or(StorageError::NoDataDir)?;

        Ok(proj_dirs.data_dir().join("postboard.db"))
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        // session.email references users.email
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `f` with exclusive access to the connection.
    fn with_conn<T>(&self, f: impl FnOnce(&mut Connection) -> Result<T>) -> Result<T> {
        let mut conn = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        f(&mut conn)
    }

    // === Session ===

    /// Log in as `email`, creating the user on first login.
    pub fn login(&self, email: &str) -> Result<()> {
        self.with_conn(|conn| SessionRepo::start(conn, email))
    }

    /// Log out. Returns false if nobody was logged in.
    pub fn logout(&self) -> Result<bool> {
        self.with_conn(|conn| SessionRepo::end(conn))
    }

    /// Get the logged-in user.
    pub fn current_user(&self) -> Result<Option<User>> {
        self.with_conn(|conn| SessionRepo::current_user(conn))
    }

    /// Build a session snapshot from the persisted session.
    pub fn session_snapshot(&self) -> Result<SessionSnapshot> {
        Ok(match self.current_user()? {
            Some(user) => SessionSnapshot::logged_in(user.email)
                .with_admin(user.is_admin)
                .with_blocked(user.is_blocked),
            None => SessionSnapshot::logged_out(),
        })
    }

    // === Users ===

    /// Get a user by email.
    pub fn get_user(&self, email: &str) -> Result<Option<User>> {
        self.with_conn(|conn| UsersRepo::get(conn, email))
    }

    /// Get all users.
    pub fn get_all_users(&self) -> Result<Vec<User>> {
        self.with_conn(|conn| UsersRepo::get_all(conn))
    }

    /// Grant or revoke admin rights.
    pub fn set_admin(&self, email: &str, is_admin: bool) -> Result<()> {
        self.with_conn(|conn| UsersRepo::set_admin(conn, email, is_admin))
    }

    /// Grant admin rights to every email in `emails`, all or nothing.
    pub fn seed_admins(&self, emails: &[String]) -> Result<()> {
        if emails.is_empty() {
            return Ok(());
        }

        self.with_conn(|conn| {
            let tx = conn.transaction()?;
            for email in emails {
                UsersRepo::set_admin(&tx, email, true)?;
            }
            tx.commit()?;
            Ok(())
        })?;

        info!("Seeded {} admin account(s)", emails.len());
        Ok(())
    }

    /// Block or unblock a user.
    pub fn set_blocked(&self, email: &str, is_blocked: bool) -> Result<()> {
        self.with_conn(|conn| UsersRepo::set_blocked(conn, email, is_blocked))
    }

    // === Notifications ===

    /// Add an unread notification.
    pub fn add_notification(&self, recipient_email: &str, message: &str) -> Result<i64> {
        self.with_conn(|conn| NotificationsRepo::insert(conn, recipient_email, message))
    }

    /// Count unread notifications for a recipient.
    pub fn count_unread(&self, recipient_email: &str) -> Result<i64> {
        self.with_conn(|conn| NotificationsRepo::count_unread(conn, recipient_email))
    }

    /// Get notifications for a recipient, newest first.
    pub fn get_notifications(&self, recipient_email: &str) -> Result<Vec<Notification>> {
        self.with_conn(|conn| NotificationsRepo::get_for(conn, recipient_email))
    }

    /// Mark all notifications for a recipient as read.
    pub fn mark_all_read(&self, recipient_email: &str) -> Result<usize> {
        self.with_conn(|conn| NotificationsRepo::mark_all_read(conn, recipient_email))
    }
}
