//! Reusable test helpers for service integration tests.
//!
//! Every test gets its own store and its own temporary session directory, so
//! tests are fully isolated and can run in parallel.
#![allow(dead_code)]

use std::sync::Arc;

use sh_backend::api::AppState;
use sh_backend::config::Config;
use sh_backend::store::{MemoryStore, Store};
use sh_common::{Role, User};
use tempfile::TempDir;
use uuid::Uuid;

/// Test fixture owning the service state and the temp dir behind its
/// session file. Keep the fixture alive for the duration of the test; the
/// directory is removed on drop.
pub struct TestApp {
    pub state: AppState,
    _data_dir: TempDir,
}

fn test_config(data_dir: &TempDir) -> Config {
    Config {
        latency_scale: 0.0,
        data_dir: data_dir.path().to_path_buf(),
    }
}

/// App over the seeded demo fixtures with latency disabled.
pub fn seeded_test_app() -> TestApp {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let state = AppState::new(test_config(&data_dir));
    TestApp {
        state,
        _data_dir: data_dir,
    }
}

/// App over an empty store, for tests that build their own data.
pub fn empty_test_app() -> TestApp {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let state = AppState::with_store(Arc::new(MemoryStore::new()), test_config(&data_dir));
    TestApp {
        state,
        _data_dir: data_dir,
    }
}

/// Insert a fresh user and return it.
pub fn create_test_user(app: &TestApp, name: &str) -> User {
    let user = User {
        id: Uuid::now_v7(),
        name: name.to_string(),
        email: format!("{}@test.com", name.to_lowercase().replace(' ', ".")),
        role: Role::User,
        avatar_url: format!("https://picsum.photos/seed/{name}/100/100"),
        level: 1,
        points: 0,
        streak: 0,
    };
    app.state.store.insert_user(user.clone());
    user
}
