//! Study Room Error Types

use thiserror::Error;

/// Study room error types.
#[derive(Debug, Error)]
pub enum RoomError {
    /// Study room not found.
    #[error("Study room not found")]
    NotFound,

    /// Study room is at capacity.
    #[error("Study room is full")]
    Full,

    /// Validation error.
    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type RoomResult<T> = Result<T, RoomError>;
