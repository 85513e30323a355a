//! Storage error types.

use thiserror::Error;

/// Errors from the Postboard database.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Creating the database directory failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A role change named an email that has never logged in.
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    /// The platform has no data directory for the default database path.
    #[error("Could not determine the app data directory")]
    NoDataDir,

    /// A thread panicked while holding the connection.
    #[error("Database connection lock poisoned")]
    LockPoisoned,
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
