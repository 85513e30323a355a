//! Users repository.

use rusqlite::{params, Connection, OptionalExtension};

use super::parse_datetime;
use crate::error::{Result, StorageError};
use crate::models::User;

/// Repository for user roles.
pub struct UsersRepo;

impl UsersRepo {
    /// Insert a user with no roles. Existing users are left untouched.
    pub fn ensure(conn: &Connection, email: &str) -> Result<()> {
        conn.execute(
            "INSERT INTO users (email) VALUES (?1) ON CONFLICT(email) DO NOTHING",
            [email],
        )?;
        Ok(())
    }

    /// Get a user by email.
    pub fn get(conn: &Connection, email: &str) -> Result<Option<User>> {
        let user = conn
            .query_row(
                "SELECT email, is_admin, is_blocked, created_at FROM users WHERE email = ?1",
                [email],
                |row| {
                    Ok(User {
                        email: row.get(0)?,
                        is_admin: row.get(1)?,
                        is_blocked: row.get(2)?,
                        created_at: parse_datetime(&row.get::<_, String>(3)?),
                    })
                },
            )
            .optional()?;

        Ok(user)
    }

    /// Get all users ordered by email.
    pub fn get_all(conn: &Connection) -> Result<Vec<User>> {
        let mut stmt = conn
            .prepare("SELECT email, is_admin, is_blocked, created_at FROM users ORDER BY email")?;

        let users = stmt
            .query_map([], |row| {
                Ok(User {
                    email: row.get(0)?,
                    is_admin: row.get(1)?,
                    is_blocked: row.get(2)?,
                    created_at: parse_datetime(&row.get::<_, String>(3)?),
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(users)
    }

    /// Grant or revoke admin rights, creating the user if needed.
    pub fn set_admin(conn: &Connection, email: &str, is_admin: bool) -> Result<()> {
        conn.execute(
            "INSERT INTO users (email, is_admin) VALUES (?1, ?2)
             ON CONFLICT(email) DO UPDATE SET is_admin = ?2",
            params![email, is_admin],
        )?;
        Ok(())
    }

    /// Block or unblock an existing user.
    pub fn set_blocked(conn: &Connection, email: &str, is_blocked: bool) -> Result<()> {
        let updated = conn.execute(
            "UPDATE users SET is_blocked = ?2 WHERE email = ?1",
            params![email, is_blocked],
        )?;

        if updated == 0 {
            return Err(StorageError::UnknownUser(email.to_string()));
        }
        Ok(())
    }
}
