//! Task Error Types

use thiserror::Error;

/// Task error types.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Task not found.
    #[error("Task not found")]
    NotFound,

    /// Validation error.
    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type TaskResult<T> = Result<T, TaskError>;
