//! Task Commands
//!
//! Mediates `sh_backend::tasks`, reconciling the cached list with each
//! response: append on create, replace-by-id on update, filter-out on
//! delete.

use sh_backend::tasks::{self, AddTaskRequest, TaskError, TaskResult};
use sh_common::Task;
use uuid::Uuid;

use crate::AppState;

impl AppState {
    /// Create a task and append it to the cache.
    pub async fn add_task(&self, request: AddTaskRequest) -> TaskResult<Task> {
        let task = tasks::add_task(&self.api, request).await?;
        self.data.write().await.tasks.push(task.clone());
        Ok(task)
    }

    /// Update a task and replace the cached copy.
    pub async fn update_task(&self, task: Task) -> TaskResult<Task> {
        let updated = tasks::update_task(&self.api, task).await?;
        let mut data = self.data.write().await;
        if let Some(slot) = data.tasks.iter_mut().find(|t| t.id == updated.id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// Flip a cached task's completion state.
    pub async fn toggle_task(&self, id: Uuid) -> TaskResult<Task> {
        let mut task = {
            let data = self.data.read().await;
            data.tasks
                .iter()
                .find(|t| t.id == id)
                .cloned()
                .ok_or(TaskError::NotFound)?
        };
        task.completed = !task.completed;
        self.update_task(task).await
    }

    /// Delete a task and drop it from the cache.
    pub async fn delete_task(&self, id: Uuid) -> TaskResult<()> {
        tasks::delete_task(&self.api, id).await?;
        self.data.write().await.tasks.retain(|t| t.id != id);
        Ok(())
    }
}
