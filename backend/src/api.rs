//! Application State
//!
//! Shared state threaded through every service operation.

use std::sync::Arc;

use crate::config::Config;
use crate::session::SessionFile;
use crate::store::{MemoryStore, Store};

/// Shared service state.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend. Everything goes through the trait so the in-memory
    /// mock can be substituted.
    pub store: Arc<dyn Store>,
    /// Backend configuration
    pub config: Arc<Config>,
    /// Session file for the authenticated user
    pub session: Arc<SessionFile>,
}

impl AppState {
    /// Create state backed by a freshly seeded in-memory store.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_store(Arc::new(MemoryStore::seeded()), config)
    }

    /// Create state over an explicit store. Tests use this with an empty
    /// [`MemoryStore`] when the demo fixtures would get in the way.
    #[must_use]
    pub fn with_store(store: Arc<dyn Store>, config: Config) -> Self {
        let session = Arc::new(SessionFile::new(&config.data_dir));
        Self {
            store,
            config: Arc::new(config),
            session,
        }
    }
}
