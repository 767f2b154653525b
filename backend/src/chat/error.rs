//! Chat Error Types

use thiserror::Error;

/// Chat error types.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Posting user does not exist.
    #[error("User not found")]
    UserNotFound,

    /// Validation error.
    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type ChatResult<T> = Result<T, ChatError>;
