//! Centralized error types for the leaderboard.

use thiserror::Error;

/// Failures raised by a key-value store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Create a backend error.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Create an unavailable error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Reasons a payload is not accepted as a score board.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Invalid board payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Board must contain at least one team")]
    Empty,

    #[error("Duplicate team id: {0}")]
    DuplicateId(i64),
}
