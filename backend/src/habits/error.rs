//! Habit Error Types

use thiserror::Error;

/// Habit error types.
#[derive(Debug, Error)]
pub enum HabitError {
    /// Habit not found.
    #[error("Habit not found")]
    NotFound,

    /// Validation error.
    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type HabitResult<T> = Result<T, HabitError>;
