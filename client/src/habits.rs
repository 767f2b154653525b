//! Habit Commands

use sh_backend::habits::{self, AddHabitRequest, HabitResult};
use sh_common::Habit;
use uuid::Uuid;

use crate::AppState;

impl AppState {
    /// Create a habit and append it to the cache.
    pub async fn add_habit(&self, request: AddHabitRequest) -> HabitResult<Habit> {
        let habit = habits::add_habit(&self.api, request).await?;
        self.data.write().await.habits.push(habit.clone());
        Ok(habit)
    }

    /// Update a habit and replace the cached copy.
    pub async fn update_habit(&self, habit: Habit) -> HabitResult<Habit> {
        let updated = habits::update_habit(&self.api, habit).await?;
        self.replace_cached_habit(&updated).await;
        Ok(updated)
    }

    /// Record a completion and replace the cached copy with the new streak.
    pub async fn complete_habit(&self, id: Uuid) -> HabitResult<Habit> {
        let completed = habits::complete_habit(&self.api, id).await?;
        self.replace_cached_habit(&completed).await;
        Ok(completed)
    }

    /// Delete a habit and drop it from the cache.
    pub async fn delete_habit(&self, id: Uuid) -> HabitResult<()> {
        habits::delete_habit(&self.api, id).await?;
        self.data.write().await.habits.retain(|h| h.id != id);
        Ok(())
    }

    async fn replace_cached_habit(&self, habit: &Habit) {
        let mut data = self.data.write().await;
        if let Some(slot) = data.habits.iter_mut().find(|h| h.id == habit.id) {
            *slot = habit.clone();
        }
    }
}
