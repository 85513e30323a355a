//! Session repository.
//!
//! At most one session row exists (`id = 1`).

use rusqlite::{Connection, OptionalExtension};

use crate::error::Result;
use crate::models::User;
use crate::repository::UsersRepo;

/// Repository for the persisted login session.
pub struct SessionRepo;

impl SessionRepo {
    /// Start a session for `email`, replacing any existing one.
    pub fn start(conn: &Connection, email: &str) -> Result<()> {
        UsersRepo::ensure(conn, email)?;
        conn.execute(
            "INSERT INTO session (id, email) VALUES (1, ?1)
             ON CONFLICT(id) DO UPDATE SET email = ?1, logged_in_at = datetime('now')",
            [email],
        )?;
        Ok(())
    }

    /// Returns the logged-in user, if any.
    pub fn current_user(conn: &Connection) -> Result<Option<User>> {
        let email: Option<String> = conn
            .query_row("SELECT email FROM session WHERE id = 1", [], |row| {
                row.get(0)
            })
            .optional()?;

        match email {
            Some(email) => UsersRepo::get(conn, &email),
            None => Ok(None),
        }
    }

    /// End the session. Returns false if there was none.
    pub fn end(conn: &Connection) -> Result<bool> {
        let deleted = conn.execute("DELETE FROM session WHERE id = 1", [])?;
        Ok(deleted > 0)
    }
}
