//! Notifications repository.

use rusqlite::{params, Connection};

use super::parse_datetime;
use crate::error::Result;
use crate::models::Notification;

/// Repository for notifications addressed to users.
pub struct NotificationsRepo;

impl NotificationsRepo {
    /// Insert an unread notification and return its ID.
    pub fn insert(conn: &Connection, recipient_email: &str, message: &str) -> Result<i64> {
        conn.execute(
            "INSERT INTO notifications (recipient_email, message) VALUES (?1, ?2)",
            params![recipient_email, message],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Count unread notifications for a recipient.
    pub fn count_unread(conn: &Connection, recipient_email: &str) -> Result<i64> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM notifications WHERE recipient_email = ?1 AND is_read = 0",
            [recipient_email],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Get notifications for a recipient, newest first.
    pub fn get_for(conn: &Connection, recipient_email: &str) -> Result<Vec<Notification>> {
        let mut stmt = conn.prepare(
            "SELECT id, recipient_email, message, is_read, created_at FROM notifications
             WHERE recipient_email = ?1 ORDER BY id DESC",
        )?;

        let notifications = stmt
            .query_map([recipient_email], |row| {
                Ok(Notification {
                    id: row.get(0)?,
                    recipient_email: row.get(1)?,
                    message: row.get(2)?,
                    is_read: row.get(3)?,
                    created_at: parse_datetime(&row.get::<_, String>(4)?),
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(notifications)
    }

    /// Mark all notifications for a recipient as read. Returns rows changed.
    pub fn mark_all_read(conn: &Connection, recipient_email: &str) -> Result<usize> {
        let updated = conn.execute(
            "UPDATE notifications SET is_read = 1 WHERE recipient_email = ?1 AND is_read = 0",
            [recipient_email],
        )?;
        Ok(updated)
    }
}
