//! Study Room Request Types

use serde::Deserialize;
use validator::Validate;

/// Payload for creating a study room. Membership starts empty; the creator
/// joins like anyone else.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudyRoomRequest {
    /// Room name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    /// What the room is for.
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: String,
    /// Maximum members admitted at join time.
    #[validate(range(min = 2, max = 50, message = "Capacity must be between 2 and 50"))]
    #[serde(default = "default_max_members")]
    pub max_members: usize,
}

const fn default_max_members() -> usize {
    10
}
