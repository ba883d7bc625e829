//! Error Types
//!
//! Errors raised by list handlers, the storage layer and config loading.

use thiserror::Error;

/// Result type for list handlers
pub type ListResult<T> = Result<T, ListError>;

/// Errors from list operations
#[derive(Debug, Error)]
pub enum ListError {
    /// Submitted text was empty or whitespace only
    #[error("item text is empty")]
    EmptyInput,
    /// Text already present outside edit mode
    #[error("item already exists: {0}")]
    DuplicateItem(String),
    /// A click referred to a view position that no longer exists
    #[error("no item at position {0}")]
    UnknownItem(usize),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ListError {
    /// Validation errors are shown to the user and leave state untouched
    pub fn is_validation(&self) -> bool {
        matches!(self, ListError::EmptyInput | ListError::DuplicateItem(_))
    }
}

/// Errors from the key-value store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("failed to encode items: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode items: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Errors from reading [`crate::config::ListConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    LogLevel(String),
}
