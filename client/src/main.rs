//! `Studyhall` Demo - Main Entry Point
//!
//! Walks a scripted session against the mock backend: restore or log in,
//! load the dashboard, work a task and a habit, visit a study room, chat,
//! and run a short focus session.

use anyhow::Result;
use chrono::{Days, Utc};
use tracing::info;

use sh_backend::config::Config;
use sh_backend::rooms::CreateStudyRoomRequest;
use sh_backend::tasks::AddTaskRequest;
use sh_client::focus::FocusTimer;
use sh_client::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studyhall=debug,sh_backend=debug,sh_client=debug".into()),
        )
        .json()
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        latency_scale = config.latency_scale,
        "Starting Studyhall"
    );

    let state = AppState::new(sh_backend::api::AppState::new(config));

    // Pick up a previous session, otherwise sign in with the demo account.
    let user = match state.restore_session().await? {
        Some(user) => {
            info!(name = %user.name, "Welcome back");
            user
        }
        None => {
            let user = state.login("user@test.com", "password").await?;
            info!(name = %user.name, "Logged in");
            user
        }
    };

    state.fetch_all().await;
    let (completed, total) = state.task_counts().await;
    info!(completed, total, "Dashboard loaded");

    // Work a task end to end.
    let task = state
        .add_task(AddTaskRequest {
            user_id: user.id,
            title: "Outline biology essay".to_string(),
            description: "Intro, three arguments, conclusion".to_string(),
            due_date: Utc::now().date_naive() + Days::new(3),
            points: 10,
        })
        .await?;
    info!(title = %task.title, due = %task.due_date, "Task added");

    let task = state.toggle_task(task.id).await?;
    info!(title = %task.title, completed = task.completed, "Task done");

    // Keep a habit streak going.
    if let Some(habit) = state.habits().await.first().cloned() {
        let habit = state.complete_habit(habit.id).await?;
        info!(title = %habit.title, streak = habit.streak, "Habit completed");
    }

    // Open a fresh study room and say hello.
    let room = state
        .create_room(CreateStudyRoomRequest {
            name: "Evening Review Crew".to_string(),
            description: "Daily recap before bed".to_string(),
            max_members: 6,
        })
        .await?;
    state.join_room(room.id).await?;

    state.open_room(room.id);
    state.fetch_messages(room.id).await?;
    state
        .post_message(room.id, "First! Who else is reviewing tonight?")
        .await?;
    info!(
        room = %room.name,
        messages = state.room_messages(room.id).len(),
        "Chatting"
    );
    state.leave_room(room.id);

    // A few seconds of focus before wrapping up.
    let mut timer = FocusTimer::new();
    timer.start();
    let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
    interval.tick().await;
    for _ in 0..3 {
        interval.tick().await;
        timer.tick();
    }
    timer.pause();
    info!(remaining = %timer.remaining_display(), "Focus session paused");

    if let Some(summary) = state.level_summary().await {
        info!(
            level = summary.level,
            progress = summary.progress,
            to_next = summary.points_to_next_level,
            "Level summary"
        );
    }

    info!("Session saved; run again to restore it");
    Ok(())
}
