//! Reusable test helpers for client state tests.
//!
//! Each fixture owns its backend handle and the temp dir behind the session
//! file, so tests are fully isolated and can run in parallel.
#![allow(dead_code)]

use sh_backend::api;
use sh_backend::config::Config;
use sh_client::AppState;
use tempfile::TempDir;

/// Test fixture owning the client state, the backend it talks to, and the
/// temp dir holding the session file. Keep the fixture alive for the
/// duration of the test; the directory is removed on drop.
pub struct TestClient {
    pub state: AppState,
    pub backend: api::AppState,
    config: Config,
    _data_dir: TempDir,
}

impl TestClient {
    /// A second client over a freshly seeded backend sharing this fixture's
    /// session directory, as after an app restart.
    pub fn restarted(&self) -> AppState {
        AppState::new(api::AppState::new(self.config.clone()))
    }
}

fn client_with_scale(latency_scale: f64) -> TestClient {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = Config {
        latency_scale,
        data_dir: data_dir.path().to_path_buf(),
    };
    let backend = api::AppState::new(config.clone());
    TestClient {
        state: AppState::new(backend.clone()),
        backend,
        config,
        _data_dir: data_dir,
    }
}

/// Client over the seeded demo fixtures with latency disabled.
pub fn seeded_client() -> TestClient {
    client_with_scale(0.0)
}

/// Client with the full latency table active, for in-flight cancellation
/// tests.
pub fn slow_client() -> TestClient {
    client_with_scale(1.0)
}
