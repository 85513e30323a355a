//! Error types for the UI crate.

use thiserror::Error;

/// UI-specific errors.
#[derive(Debug, Error)]
pub enum UiError {
    /// Storage error.
    #[error("storage error: {0}")]
    Storage(#[from] postboard_storage::StorageError),

    /// Configuration error.
    #[error("core error: {0}")]
    Core(#[from] postboard_core::CoreError),
}

/// Result type for UI operations.
pub type Result<T> = std::result::Result<T, UiError>;
