//! Bulk Loading & Cache Accessors

use sh_backend::{auth, habits, rooms, tasks};
use sh_common::{Habit, StudyRoom, Task, User};
use tracing::{debug, warn};

use crate::AppState;

impl AppState {
    /// Load the session's tasks, habits and rooms in parallel, plus the user
    /// directory for admin accounts. A failure is logged and leaves every
    /// previously loaded list untouched; nothing commits partially.
    pub async fn fetch_all(&self) {
        let Some(user) = self.current_user().await else {
            debug!("No session, skipping bulk load");
            return;
        };

        self.data.write().await.loading = true;
        if let Err(err) = self.load_all(&user).await {
            warn!("Failed to fetch session data: {err}");
        }
        self.data.write().await.loading = false;
    }

    async fn load_all(&self, user: &User) -> anyhow::Result<()> {
        let (tasks, habits, rooms) = tokio::join!(
            tasks::get_tasks(&self.api, user.id),
            habits::get_habits(&self.api, user.id),
            rooms::get_study_rooms(&self.api),
        );
        let (tasks, habits, rooms) = (tasks?, habits?, rooms?);
        let users = if user.role.is_admin() {
            auth::get_users(&self.api).await?
        } else {
            Vec::new()
        };

        let mut data = self.data.write().await;
        data.tasks = tasks;
        data.habits = habits;
        data.rooms = rooms;
        data.users = users;
        Ok(())
    }

    /// Whether a bulk load is in flight.
    pub async fn is_loading(&self) -> bool {
        self.data.read().await.loading
    }

    /// Cached tasks for the current session.
    pub async fn tasks(&self) -> Vec<Task> {
        self.data.read().await.tasks.clone()
    }

    /// Cached habits for the current session.
    pub async fn habits(&self) -> Vec<Habit> {
        self.data.read().await.habits.clone()
    }

    /// Cached study rooms.
    pub async fn rooms(&self) -> Vec<StudyRoom> {
        self.data.read().await.rooms.clone()
    }

    /// Cached user directory. Loaded only for admin sessions.
    pub async fn users(&self) -> Vec<User> {
        self.data.read().await.users.clone()
    }
}
