//! Chat Message Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single room chat message. Immutable once created; rooms keep messages
/// in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message ID.
    pub id: Uuid,
    /// Room the message was posted to.
    pub room_id: Uuid,
    /// Posting user.
    pub user_id: Uuid,
    /// Poster's display name at post time.
    pub user_name: String,
    /// Poster's avatar URL at post time.
    pub user_avatar: String,
    /// Message body.
    pub text: String,
    /// When the message was posted.
    pub timestamp: DateTime<Utc>,
}
