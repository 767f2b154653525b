//! Authentication Error Types

use thiserror::Error;

use crate::session::SessionError;

/// Authentication error types.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid credentials (wrong email/password).
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Validation error.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Session file error.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

pub type AuthResult<T> = Result<T, AuthError>;
