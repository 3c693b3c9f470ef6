//! Store Errors

use thiserror::Error;

/// Result type for widget store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures of the key-value backend itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Missing,
    #[error("storage access failed: {0}")]
    Access(String),
}

/// Widget store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The widgets slot does not hold a valid widget list
    #[error("saved widgets are corrupted: {0}")]
    Corrupted(String),
    #[error("no widget at position {index} (list has {len})")]
    InvalidIndex { index: usize, len: usize },
    /// Corrupted data was kept because the user declined the reset
    #[error("saved widgets are unavailable")]
    Unavailable,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to serialize widgets: {0}")]
    Serialize(String),
}
