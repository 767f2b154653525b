//! Chat Commands
//!
//! Message fetches are guarded by per-room visit tokens so a reply that
//! lands after the user has left the room never overwrites the cache.

use sh_backend::chat::{self, ChatError, ChatResult, PostMessageRequest};
use sh_common::ChatMessage;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

use crate::AppState;

impl AppState {
    /// Start a room visit. Any previous visit to the same room is cancelled
    /// so its in-flight fetches are discarded.
    pub fn open_room(&self, room_id: Uuid) -> CancellationToken {
        let token = CancellationToken::new();
        if let Some((_, previous)) = self.visits.remove(&room_id) {
            previous.cancel();
        }
        self.visits.insert(room_id, token.clone());
        token
    }

    /// End a room visit and cancel its in-flight fetches.
    pub fn leave_room(&self, room_id: Uuid) {
        if let Some((_, token)) = self.visits.remove(&room_id) {
            token.cancel();
        }
    }

    /// Fetch a room's messages into the cache. If the visit is cancelled
    /// while the request is in flight, the stale reply is dropped.
    pub async fn fetch_messages(&self, room_id: Uuid) -> ChatResult<()> {
        let token = self.visits.get(&room_id).map(|entry| entry.value().clone());

        let messages = match token {
            Some(ref token) => {
                let fetched = tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        debug!(%room_id, "Visit cancelled, dropping fetch");
                        return Ok(());
                    }
                    result = chat::get_messages(&self.api, room_id) => result?,
                };
                // The visit may have ended between the reply and now.
                if token.is_cancelled() {
                    debug!(%room_id, "Visit ended, discarding stale messages");
                    return Ok(());
                }
                fetched
            }
            None => chat::get_messages(&self.api, room_id).await?,
        };

        self.messages.insert(room_id, messages);
        Ok(())
    }

    /// Post a message as the current user and append it to the cache.
    pub async fn post_message(&self, room_id: Uuid, text: &str) -> ChatResult<ChatMessage> {
        let user = self.current_user().await.ok_or(ChatError::UserNotFound)?;

        let request = PostMessageRequest {
            room_id,
            user_id: user.id,
            text: text.to_owned(),
        };
        let message = chat::post_message(&self.api, request).await?;
        self.messages
            .entry(room_id)
            .or_default()
            .push(message.clone());
        Ok(message)
    }

    /// Cached messages for a room, empty if none have been fetched.
    pub fn room_messages(&self, room_id: Uuid) -> Vec<ChatMessage> {
        self.messages
            .get(&room_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }
}
