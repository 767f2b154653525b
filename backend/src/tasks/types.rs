//! Task Request Types

use chrono::NaiveDate;
use serde::Deserialize;
use sh_common::levels::POINTS_PER_TASK;
use uuid::Uuid;
use validator::Validate;

/// Payload for creating a task. The id and the incomplete state are assigned
/// by the service.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddTaskRequest {
    /// Owning user.
    pub user_id: Uuid,
    /// Short title.
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    /// Free-form description.
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// Points awarded on completion.
    #[serde(default = "default_task_points")]
    pub points: u32,
}

fn default_task_points() -> u32 {
    POINTS_PER_TASK
}
