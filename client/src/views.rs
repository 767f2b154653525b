//! Derived Views
//!
//! Read-only projections over the cached session data. These never call the
//! backend; they reshape what the last bulk load committed.

use sh_common::levels::{self, LevelDetails};
use sh_common::Task;

use crate::AppState;

/// Directory-wide counts for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminStats {
    /// Registered users.
    pub users: usize,
    /// Tasks across the current session's cache.
    pub tasks: usize,
    /// Habits across the current session's cache.
    pub habits: usize,
    /// Study rooms.
    pub rooms: usize,
}

impl AppState {
    /// Cached tasks still open.
    pub async fn incomplete_tasks(&self) -> Vec<Task> {
        let data = self.data.read().await;
        data.tasks
            .iter()
            .filter(|task| !task.completed)
            .cloned()
            .collect()
    }

    /// Cached tasks already done.
    pub async fn completed_tasks(&self) -> Vec<Task> {
        let data = self.data.read().await;
        data.tasks
            .iter()
            .filter(|task| task.completed)
            .cloned()
            .collect()
    }

    /// Completed and total task counts, for progress displays.
    pub async fn task_counts(&self) -> (usize, usize) {
        let data = self.data.read().await;
        let completed = data.tasks.iter().filter(|task| task.completed).count();
        (completed, data.tasks.len())
    }

    /// The next `limit` open tasks ordered by due date.
    pub async fn upcoming_tasks(&self, limit: usize) -> Vec<Task> {
        let mut upcoming = self.incomplete_tasks().await;
        upcoming.sort_by_key(|task| task.due_date);
        upcoming.truncate(limit);
        upcoming
    }

    /// The current user's level bracket, or `None` when logged out.
    pub async fn level_summary(&self) -> Option<LevelDetails> {
        let user = self.current_user().await?;
        Some(levels::level_details(user.points))
    }

    /// Directory counts, available to admin sessions only.
    pub async fn admin_stats(&self) -> Option<AdminStats> {
        let user = self.current_user().await?;
        if !user.role.is_admin() {
            return None;
        }

        let data = self.data.read().await;
        Some(AdminStats {
            users: data.users.len(),
            tasks: data.tasks.len(),
            habits: data.habits.len(),
            rooms: data.rooms.len(),
        })
    }
}
