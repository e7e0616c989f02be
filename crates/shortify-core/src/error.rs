use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid slug: {0}")]
    InvalidSlug(String),
}

/// Errors surfaced by a [`Store`][crate::store::Store] backend.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store operation timed out: {0}")]
    Timeout(String),
    #[error("store rejected the request: {0}")]
    Rejected(String),
    #[error("store returned invalid data: {0}")]
    InvalidData(String),
    #[error("store operation failed: {0}")]
    Operation(String),
}
