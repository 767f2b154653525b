//! Chat Request Types

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Payload for posting a message. The poster's display name and avatar are
/// stamped by the service at post time.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostMessageRequest {
    /// Target room.
    pub room_id: Uuid,
    /// Posting user.
    pub user_id: Uuid,
    /// Message body.
    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub text: String,
}
