//! Habit Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How often a habit is meant to recur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Once per day.
    #[default]
    Daily,
    /// Once per week.
    Weekly,
}

/// A recurring habit with a completion streak.
///
/// The streak counts completion calls; it is never reset by elapsed time
/// since `last_completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Habit ID.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Short title.
    pub title: String,
    /// Recurrence cadence.
    pub frequency: Frequency,
    /// Consecutive completion count.
    pub streak: u32,
    /// When the habit was last completed. `None` until the first completion.
    pub last_completed: Option<DateTime<Utc>>,
    /// Points awarded per completion.
    pub points: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Frequency::Daily).unwrap(), "\"daily\"");
        assert_eq!(
            serde_json::to_string(&Frequency::Weekly).unwrap(),
            "\"weekly\""
        );
    }

    #[test]
    fn last_completed_roundtrips_as_option() {
        let habit = Habit {
            id: Uuid::now_v7(),
            user_id: Uuid::now_v7(),
            title: "Review flashcards".to_string(),
            frequency: Frequency::Daily,
            streak: 0,
            last_completed: None,
            points: 5,
        };

        let json = serde_json::to_string(&habit).unwrap();
        let back: Habit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, habit);
        assert!(back.last_completed.is_none());
    }
}
