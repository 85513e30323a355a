//! Data models for storage.

use chrono::{DateTime, Utc};

pub use postboard_core::Notification;

/// A user known to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Email address (primary key).
    pub email: String,
    /// Whether the user may open the admin panel.
    pub is_admin: bool,
    /// Whether the user is barred from creating posts.
    pub is_blocked: bool,
    /// Timestamp.
    pub created_at: DateTime<Utc>,
}
