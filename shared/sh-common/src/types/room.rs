//! Study Room Types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A shared study room users can join up to a fixed capacity.
///
/// `member_count` always equals `members.len()`; mutate membership through
/// [`StudyRoom::push_member`] to keep the two in sync. Capacity is enforced
/// at join time only, not at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyRoom {
    /// Room ID. Doubles as the shareable join code.
    pub id: Uuid,
    /// Room name.
    pub name: String,
    /// What the room is for.
    pub description: String,
    /// Member user ids in join order.
    pub members: Vec<Uuid>,
    /// Cached `members.len()`.
    pub member_count: usize,
    /// Maximum number of members admitted at join time.
    pub max_members: usize,
}

impl StudyRoom {
    /// Whether the user is already a member.
    #[must_use]
    pub fn is_member(&self, user_id: Uuid) -> bool {
        self.members.contains(&user_id)
    }

    /// Whether the room is at capacity.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.member_count >= self.max_members
    }

    /// The shareable invitation token for this room.
    #[must_use]
    pub fn join_code(&self) -> String {
        self.id.to_string()
    }

    /// Append a member and recompute the cached count.
    pub fn push_member(&mut self, user_id: Uuid) {
        self.members.push(user_id);
        self.member_count = self.members.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(max_members: usize) -> StudyRoom {
        StudyRoom {
            id: Uuid::now_v7(),
            name: "Finals Cram Session".to_string(),
            description: "Silent study, pomodoro style.".to_string(),
            members: Vec::new(),
            member_count: 0,
            max_members,
        }
    }

    #[test]
    fn push_member_keeps_count_in_sync() {
        let mut room = room(2);
        let member = Uuid::now_v7();

        room.push_member(member);
        assert_eq!(room.member_count, 1);
        assert_eq!(room.members.len(), 1);
        assert!(room.is_member(member));
        assert!(!room.is_full());
    }

    #[test]
    fn full_at_capacity() {
        let mut room = room(2);
        room.push_member(Uuid::now_v7());
        room.push_member(Uuid::now_v7());

        assert!(room.is_full());
        assert!(!room.is_member(Uuid::now_v7()));
    }

    #[test]
    fn join_code_is_the_room_id() {
        let room = room(10);
        assert_eq!(room.join_code(), room.id.to_string());
    }
}
