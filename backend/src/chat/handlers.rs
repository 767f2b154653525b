//! Chat Handlers

use chrono::Utc;
use sh_common::ChatMessage;
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use crate::api::AppState;
use crate::latency::{self, Op};
use crate::store::Store;

use super::error::{ChatError, ChatResult};
use super::types::PostMessageRequest;

/// A room's messages in insertion order. Unknown rooms yield an empty list
/// rather than an error.
#[tracing::instrument(skip(state))]
pub async fn get_messages(state: &AppState, room_id: Uuid) -> ChatResult<Vec<ChatMessage>> {
    latency::simulate(&state.config, Op::GetMessages).await;
    Ok(state.store.list_messages(room_id))
}

/// Append a message to a room, stamped with the poster's current display
/// name and avatar. The room's list is created lazily on first post.
#[tracing::instrument(skip(state, request), fields(room_id = %request.room_id, user_id = %request.user_id))]
pub async fn post_message(state: &AppState, request: PostMessageRequest) -> ChatResult<ChatMessage> {
    request
        .validate()
        .map_err(|e| ChatError::Validation(e.to_string()))?;

    latency::simulate(&state.config, Op::PostMessage).await;

    let user = state
        .store
        .find_user_by_id(request.user_id)
        .ok_or(ChatError::UserNotFound)?;

    let message = ChatMessage {
        id: Uuid::now_v7(),
        room_id: request.room_id,
        user_id: user.id,
        user_name: user.name,
        user_avatar: user.avatar_url,
        text: request.text,
        timestamp: Utc::now(),
    };
    state.store.append_message(message.clone());
    debug!(message_id = %message.id, "Message posted");
    Ok(message)
}
