//! Session Commands
//!
//! Login, logout and session restore, mediating `sh_backend::auth`.

use sh_backend::auth::{self, AuthResult, LoginRequest};
use sh_common::User;
use tracing::debug;

use crate::{AppState, DataState};

impl AppState {
    /// Log in and make the returned user the current session.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<User> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let user = auth::login(&self.api, request).await?;
        self.auth.write().await.user = Some(user.clone());
        Ok(user)
    }

    /// Adopt a persisted session, if one exists.
    pub async fn restore_session(&self) -> AuthResult<Option<User>> {
        let user = auth::restore_session(&self.api).await?;
        if let Some(user) = &user {
            debug!(user_id = %user.id, "Session restored");
            self.auth.write().await.user = Some(user.clone());
        }
        Ok(user)
    }

    /// Log out: clear the durable session, the cached collections, and any
    /// open room visits.
    pub async fn logout(&self) -> AuthResult<()> {
        auth::logout(&self.api).await?;

        self.auth.write().await.user = None;
        *self.data.write().await = DataState::default();
        self.messages.clear();
        for entry in self.visits.iter() {
            entry.value().cancel();
        }
        self.visits.clear();
        Ok(())
    }
}
