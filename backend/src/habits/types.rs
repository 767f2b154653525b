//! Habit Request Types

use serde::Deserialize;
use sh_common::levels::POINTS_PER_HABIT;
use sh_common::Frequency;
use uuid::Uuid;
use validator::Validate;

/// Payload for creating a habit. The id is assigned by the service; the
/// streak starts at zero with no completion recorded.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddHabitRequest {
    /// Owning user.
    pub user_id: Uuid,
    /// Short title.
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    /// Recurrence cadence.
    #[serde(default)]
    pub frequency: Frequency,
    /// Points awarded per completion.
    #[serde(default = "default_habit_points")]
    pub points: u32,
}

fn default_habit_points() -> u32 {
    POINTS_PER_HABIT
}
