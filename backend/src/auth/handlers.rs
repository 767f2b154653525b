//! Authentication Handlers

use sh_common::User;
use tracing::info;
use validator::Validate;

use crate::api::AppState;
use crate::latency::{self, Op};
use crate::store::Store;

use super::error::{AuthError, AuthResult};
use super::types::LoginRequest;

/// The one password every demo account accepts.
pub const DEMO_PASSWORD: &str = "password";

/// Log in with email and password.
///
/// Succeeds only for a known email combined with the demo password literal;
/// an unknown email and a wrong password are indistinguishable to the
/// caller. On success the user is persisted as the durable session.
#[tracing::instrument(skip(state, request), fields(email = %request.email))]
pub async fn login(state: &AppState, request: LoginRequest) -> AuthResult<User> {
    request
        .validate()
        .map_err(|e| AuthError::Validation(e.to_string()))?;

    latency::simulate(&state.config, Op::Login).await;

    let user = state
        .store
        .find_user_by_email(&request.email)
        .ok_or(AuthError::InvalidCredentials)?;
    if request.password != DEMO_PASSWORD {
        return Err(AuthError::InvalidCredentials);
    }

    state.session.persist(&user).await?;
    info!(user_id = %user.id, "User logged in");
    Ok(user)
}

/// Clear the persisted session.
#[tracing::instrument(skip(state))]
pub async fn logout(state: &AppState) -> AuthResult<()> {
    state.session.clear().await?;
    info!("Session cleared");
    Ok(())
}

/// Restore the persisted session, if any.
#[tracing::instrument(skip(state))]
pub async fn restore_session(state: &AppState) -> AuthResult<Option<User>> {
    Ok(state.session.restore().await?)
}

/// The full user directory. Role gating is the caller's concern.
#[tracing::instrument(skip(state))]
pub async fn get_users(state: &AppState) -> AuthResult<Vec<User>> {
    latency::simulate(&state.config, Op::GetUsers).await;
    Ok(state.store.list_users())
}
