//! `Studyhall` Client State Layer
//!
//! Session-scoped view over the mock backend: the authenticated user, cached
//! task/habit/room lists, and lazily fetched per-room message caches. Every
//! service call is mediated here, so data flows one way: caller action,
//! state method, service call (with its simulated delay), cache mutation.
//!
//! The caches are copies. The backend's store stays the single writable
//! source of truth; this layer reconciles its copies against each service
//! response.

mod auth;
mod chat;
mod data;
mod habits;
mod rooms;
mod tasks;
mod views;

pub mod focus;

pub use views::AdminStats;

use std::sync::Arc;

use dashmap::DashMap;
use sh_common::{ChatMessage, Habit, StudyRoom, Task, User};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Authenticated-session state.
#[derive(Debug, Default)]
struct AuthState {
    /// Currently authenticated user, if any.
    user: Option<User>,
}

/// Cached collections for the current session.
#[derive(Debug, Default)]
struct DataState {
    tasks: Vec<Task>,
    habits: Vec<Habit>,
    rooms: Vec<StudyRoom>,
    /// Admin-only user directory; empty for regular accounts.
    users: Vec<User>,
    /// Whether a bulk load is in flight.
    loading: bool,
}

/// Client application state.
#[derive(Clone)]
pub struct AppState {
    /// In-process service backend.
    api: sh_backend::api::AppState,
    /// Authenticated session state.
    auth: Arc<RwLock<AuthState>>,
    /// Cached collections.
    data: Arc<RwLock<DataState>>,
    /// Per-room message cache, populated on first fetch.
    messages: Arc<DashMap<Uuid, Vec<ChatMessage>>>,
    /// Open room visits and their cancellation tokens.
    visits: Arc<DashMap<Uuid, CancellationToken>>,
}

impl AppState {
    /// Create client state over a backend handle.
    #[must_use]
    pub fn new(api: sh_backend::api::AppState) -> Self {
        Self {
            api,
            auth: Arc::new(RwLock::new(AuthState::default())),
            data: Arc::new(RwLock::new(DataState::default())),
            messages: Arc::new(DashMap::new()),
            visits: Arc::new(DashMap::new()),
        }
    }

    /// The authenticated user, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.auth.read().await.user.clone()
    }
}
