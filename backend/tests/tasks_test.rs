//! Task Service Integration Tests
//!
//! Run with: `cargo test --test tasks_test -- --nocapture`

mod helpers;

use chrono::{Days, Utc};
use helpers::{create_test_user, empty_test_app, seeded_test_app};
use sh_backend::store::ALICE_ID;
use sh_backend::tasks::{self, AddTaskRequest, TaskError};
use uuid::Uuid;

fn add_request(user_id: Uuid, title: &str) -> AddTaskRequest {
    AddTaskRequest {
        user_id,
        title: title.to_string(),
        description: "details".to_string(),
        due_date: Utc::now().date_naive() + Days::new(3),
        points: 10,
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn tasks_are_scoped_by_user() {
    let app = seeded_test_app();

    let alice_tasks = tasks::get_tasks(&app.state, ALICE_ID).await.unwrap();
    assert_eq!(alice_tasks.len(), 2);
    assert_eq!(alice_tasks[0].title, "Finish Math Homework");

    let stranger = Uuid::now_v7();
    assert!(tasks::get_tasks(&app.state, stranger).await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn add_task_assigns_id_and_starts_incomplete() {
    let app = empty_test_app();
    let user = create_test_user(&app, "Carol");

    let task = tasks::add_task(&app.state, add_request(user.id, "Write lab report"))
        .await
        .expect("Add should succeed");

    assert!(!task.completed, "New tasks start incomplete");
    assert_eq!(task.user_id, user.id);

    let listed = tasks::get_tasks(&app.state, user.id).await.unwrap();
    assert_eq!(listed, vec![task]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn add_task_rejects_empty_title() {
    let app = empty_test_app();
    let user = create_test_user(&app, "Carol");

    let err = tasks::add_task(&app.state, add_request(user.id, ""))
        .await
        .expect_err("Empty title should fail validation");
    assert!(matches!(err, TaskError::Validation(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn update_task_replaces_by_id() {
    let app = empty_test_app();
    let user = create_test_user(&app, "Carol");
    let mut task = tasks::add_task(&app.state, add_request(user.id, "Draft essay"))
        .await
        .unwrap();

    task.title = "Final essay".to_string();
    task.completed = true;
    let updated = tasks::update_task(&app.state, task.clone()).await.unwrap();
    assert_eq!(updated, task);

    let listed = tasks::get_tasks(&app.state, user.id).await.unwrap();
    assert_eq!(listed.len(), 1, "Update must replace, not append");
    assert_eq!(listed[0].title, "Final essay");
    assert!(listed[0].completed);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn update_unknown_task_is_not_found() {
    let app = empty_test_app();
    let user = create_test_user(&app, "Carol");
    let mut task = tasks::add_task(&app.state, add_request(user.id, "Ephemeral"))
        .await
        .unwrap();
    task.id = Uuid::now_v7();

    let err = tasks::update_task(&app.state, task)
        .await
        .expect_err("Unknown id should be rejected");
    assert!(matches!(err, TaskError::NotFound));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn delete_task_removes_and_tolerates_absent_ids() {
    let app = empty_test_app();
    let user = create_test_user(&app, "Carol");
    let task = tasks::add_task(&app.state, add_request(user.id, "Disposable"))
        .await
        .unwrap();

    tasks::delete_task(&app.state, task.id).await.unwrap();
    assert!(tasks::get_tasks(&app.state, user.id).await.unwrap().is_empty());

    // Deleting again is a no-op.
    tasks::delete_task(&app.state, task.id).await.unwrap();
}
