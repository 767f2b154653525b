//! Storage Abstraction
//!
//! The service surface reaches storage only through the [`Store`] trait, so
//! the in-memory mock can be swapped for a real persistence backend without
//! touching the domain modules or the client state layer. Trait methods are
//! synchronous: the mock is plain in-process data access, and asynchrony
//! (with its simulated latency) lives in the service layer above.

mod memory;
mod seed;

pub use memory::MemoryStore;
pub use seed::{ALICE_ID, BOB_ID};

use sh_common::{ChatMessage, Habit, StudyRoom, Task, User};
use uuid::Uuid;

/// Per-entity get/add/update/delete storage operations.
///
/// List operations return entities in creation order (ids are v7 UUIDs, so
/// id order is creation order). Update operations replace by id and return
/// the stored value, or `None` when the id is absent.
pub trait Store: Send + Sync {
    // Users

    /// Look up a user by id.
    fn find_user_by_id(&self, id: Uuid) -> Option<User>;

    /// Look up a user by exact email.
    fn find_user_by_email(&self, email: &str) -> Option<User>;

    /// All users, in creation order.
    fn list_users(&self) -> Vec<User>;

    /// Add a user.
    fn insert_user(&self, user: User);

    // Tasks

    /// Look up a task by id.
    fn find_task(&self, id: Uuid) -> Option<Task>;

    /// A user's tasks, in creation order.
    fn list_tasks_for_user(&self, user_id: Uuid) -> Vec<Task>;

    /// Add a task.
    fn insert_task(&self, task: Task);

    /// Replace a task by id. `None` if the id is absent.
    fn update_task(&self, task: Task) -> Option<Task>;

    /// Remove a task by id. Removing an absent id is a no-op.
    fn delete_task(&self, id: Uuid);

    // Habits

    /// Look up a habit by id.
    fn find_habit(&self, id: Uuid) -> Option<Habit>;

    /// A user's habits, in creation order.
    fn list_habits_for_user(&self, user_id: Uuid) -> Vec<Habit>;

    /// Add a habit.
    fn insert_habit(&self, habit: Habit);

    /// Replace a habit by id. `None` if the id is absent.
    fn update_habit(&self, habit: Habit) -> Option<Habit>;

    /// Remove a habit by id. Removing an absent id is a no-op.
    fn delete_habit(&self, id: Uuid);

    // Study rooms

    /// Look up a room by id.
    fn find_room(&self, id: Uuid) -> Option<StudyRoom>;

    /// All rooms, in creation order.
    fn list_rooms(&self) -> Vec<StudyRoom>;

    /// Add a room.
    fn insert_room(&self, room: StudyRoom);

    /// Replace a room by id. `None` if the id is absent.
    fn update_room(&self, room: StudyRoom) -> Option<StudyRoom>;

    // Chat messages

    /// A room's messages in insertion order. Empty for unknown rooms.
    fn list_messages(&self, room_id: Uuid) -> Vec<ChatMessage>;

    /// Append a message to its room, creating the room's list on first post.
    fn append_message(&self, message: ChatMessage);
}
