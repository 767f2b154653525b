//! Habit Handlers

use chrono::Utc;
use sh_common::Habit;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::api::AppState;
use crate::latency::{self, Op};
use crate::store::Store;

use super::error::{HabitError, HabitResult};
use super::types::AddHabitRequest;

/// A user's habits, in creation order.
#[tracing::instrument(skip(state))]
pub async fn get_habits(state: &AppState, user_id: Uuid) -> HabitResult<Vec<Habit>> {
    latency::simulate(&state.config, Op::GetHabits).await;
    Ok(state.store.list_habits_for_user(user_id))
}

/// Create a habit with a zero streak and no completion recorded.
#[tracing::instrument(skip(state, request), fields(user_id = %request.user_id))]
pub async fn add_habit(state: &AppState, request: AddHabitRequest) -> HabitResult<Habit> {
    request
        .validate()
        .map_err(|e| HabitError::Validation(e.to_string()))?;

    latency::simulate(&state.config, Op::AddHabit).await;

    let habit = Habit {
        id: Uuid::now_v7(),
        user_id: request.user_id,
        title: request.title,
        frequency: request.frequency,
        streak: 0,
        last_completed: None,
        points: request.points,
    };
    state.store.insert_habit(habit.clone());
    info!(habit_id = %habit.id, "Habit created");
    Ok(habit)
}

/// Replace a habit by id.
#[tracing::instrument(skip(state, habit), fields(habit_id = %habit.id))]
pub async fn update_habit(state: &AppState, habit: Habit) -> HabitResult<Habit> {
    latency::simulate(&state.config, Op::UpdateHabit).await;
    state.store.update_habit(habit).ok_or(HabitError::NotFound)
}

/// Remove a habit by id. Removing an absent id is a no-op.
#[tracing::instrument(skip(state))]
pub async fn delete_habit(state: &AppState, id: Uuid) -> HabitResult<()> {
    latency::simulate(&state.config, Op::DeleteHabit).await;
    state.store.delete_habit(id);
    debug!("Habit deleted");
    Ok(())
}

/// Record a completion: streak goes up by exactly one and `last_completed`
/// is stamped with the current time. Elapsed time since the previous
/// completion is not consulted; a missed day or week never resets the
/// streak.
#[tracing::instrument(skip(state))]
pub async fn complete_habit(state: &AppState, id: Uuid) -> HabitResult<Habit> {
    latency::simulate(&state.config, Op::CompleteHabit).await;

    let mut habit = state.store.find_habit(id).ok_or(HabitError::NotFound)?;
    habit.streak += 1;
    habit.last_completed = Some(Utc::now());
    // TODO: award the habit's points to the owning user once point accrual lands.

    let habit = state.store.update_habit(habit).ok_or(HabitError::NotFound)?;
    info!(streak = habit.streak, "Habit completed");
    Ok(habit)
}
