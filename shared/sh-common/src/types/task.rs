//! Task Types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A one-off to-do item worth a fixed number of points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task ID.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Short title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Due date (date only, no time component).
    pub due_date: NaiveDate,
    /// Whether the task has been completed.
    pub completed: bool,
    /// Points awarded on completion.
    pub points: u32,
}
