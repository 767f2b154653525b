//! Task Handlers

use sh_common::Task;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::api::AppState;
use crate::latency::{self, Op};
use crate::store::Store;

use super::error::{TaskError, TaskResult};
use super::types::AddTaskRequest;

/// A user's tasks, in creation order.
#[tracing::instrument(skip(state))]
pub async fn get_tasks(state: &AppState, user_id: Uuid) -> TaskResult<Vec<Task>> {
    latency::simulate(&state.config, Op::GetTasks).await;
    Ok(state.store.list_tasks_for_user(user_id))
}

/// Create a task. A fresh timestamp-derived id is assigned and the task
/// starts incomplete.
#[tracing::instrument(skip(state, request), fields(user_id = %request.user_id))]
pub async fn add_task(state: &AppState, request: AddTaskRequest) -> TaskResult<Task> {
    request
        .validate()
        .map_err(|e| TaskError::Validation(e.to_string()))?;

    latency::simulate(&state.config, Op::AddTask).await;

    let task = Task {
        id: Uuid::now_v7(),
        user_id: request.user_id,
        title: request.title,
        description: request.description,
        due_date: request.due_date,
        completed: false,
        points: request.points,
    };
    state.store.insert_task(task.clone());
    info!(task_id = %task.id, "Task created");
    Ok(task)
}

/// Replace a task by id.
#[tracing::instrument(skip(state, task), fields(task_id = %task.id))]
pub async fn update_task(state: &AppState, task: Task) -> TaskResult<Task> {
    latency::simulate(&state.config, Op::UpdateTask).await;
    state.store.update_task(task).ok_or(TaskError::NotFound)
}

/// Remove a task by id. Removing an absent id is a no-op.
#[tracing::instrument(skip(state))]
pub async fn delete_task(state: &AppState, id: Uuid) -> TaskResult<()> {
    latency::simulate(&state.config, Op::DeleteTask).await;
    state.store.delete_task(id);
    debug!("Task deleted");
    Ok(())
}
