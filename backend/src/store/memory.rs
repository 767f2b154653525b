//! In-Memory Store
//!
//! `DashMap`-backed [`Store`] implementation. Collections are keyed by id;
//! list operations sort by id to recover creation order. Messages keep a
//! plain `Vec` per room so insertion order is preserved exactly.

use dashmap::DashMap;
use sh_common::{ChatMessage, Habit, StudyRoom, Task, User};
use uuid::Uuid;

use super::{seed, Store};

/// The mock data layer. Cheap to create empty for tests; [`MemoryStore::seeded`]
/// builds the demo fixture set.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: DashMap<Uuid, User>,
    tasks: DashMap<Uuid, Task>,
    habits: DashMap<Uuid, Habit>,
    rooms: DashMap<Uuid, StudyRoom>,
    messages: DashMap<Uuid, Vec<ChatMessage>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the demo fixtures.
    #[must_use]
    pub fn seeded() -> Self {
        let store = Self::new();
        seed::populate(&store);
        store
    }
}

fn sorted_by_id<T>(mut items: Vec<T>, id: impl Fn(&T) -> Uuid) -> Vec<T> {
    items.sort_by_key(id);
    items
}

impl Store for MemoryStore {
    fn find_user_by_id(&self, id: Uuid) -> Option<User> {
        self.users.get(&id).map(|entry| entry.value().clone())
    }

    fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .iter()
            .find(|entry| entry.value().email == email)
            .map(|entry| entry.value().clone())
    }

    fn list_users(&self) -> Vec<User> {
        sorted_by_id(
            self.users.iter().map(|entry| entry.value().clone()).collect(),
            |user| user.id,
        )
    }

    fn insert_user(&self, user: User) {
        self.users.insert(user.id, user);
    }

    fn find_task(&self, id: Uuid) -> Option<Task> {
        self.tasks.get(&id).map(|entry| entry.value().clone())
    }

    fn list_tasks_for_user(&self, user_id: Uuid) -> Vec<Task> {
        sorted_by_id(
            self.tasks
                .iter()
                .filter(|entry| entry.value().user_id == user_id)
                .map(|entry| entry.value().clone())
                .collect(),
            |task| task.id,
        )
    }

    fn insert_task(&self, task: Task) {
        self.tasks.insert(task.id, task);
    }

    fn update_task(&self, task: Task) -> Option<Task> {
        self.tasks.get_mut(&task.id).map(|mut entry| {
            *entry.value_mut() = task.clone();
            task
        })
    }

    fn delete_task(&self, id: Uuid) {
        self.tasks.remove(&id);
    }

    fn find_habit(&self, id: Uuid) -> Option<Habit> {
        self.habits.get(&id).map(|entry| entry.value().clone())
    }

    fn list_habits_for_user(&self, user_id: Uuid) -> Vec<Habit> {
        sorted_by_id(
            self.habits
                .iter()
                .filter(|entry| entry.value().user_id == user_id)
                .map(|entry| entry.value().clone())
                .collect(),
            |habit| habit.id,
        )
    }

    fn insert_habit(&self, habit: Habit) {
        self.habits.insert(habit.id, habit);
    }

    fn update_habit(&self, habit: Habit) -> Option<Habit> {
        self.habits.get_mut(&habit.id).map(|mut entry| {
            *entry.value_mut() = habit.clone();
            habit
        })
    }

    fn delete_habit(&self, id: Uuid) {
        self.habits.remove(&id);
    }

    fn find_room(&self, id: Uuid) -> Option<StudyRoom> {
        self.rooms.get(&id).map(|entry| entry.value().clone())
    }

    fn list_rooms(&self) -> Vec<StudyRoom> {
        sorted_by_id(
            self.rooms.iter().map(|entry| entry.value().clone()).collect(),
            |room| room.id,
        )
    }

    fn insert_room(&self, room: StudyRoom) {
        self.rooms.insert(room.id, room);
    }

    fn update_room(&self, room: StudyRoom) -> Option<StudyRoom> {
        self.rooms.get_mut(&room.id).map(|mut entry| {
            *entry.value_mut() = room.clone();
            room
        })
    }

    fn list_messages(&self, room_id: Uuid) -> Vec<ChatMessage> {
        self.messages
            .get(&room_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    fn append_message(&self, message: ChatMessage) {
        self.messages.entry(message.room_id).or_default().push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sh_common::Role;

    fn user(name: &str, email: &str) -> User {
        User {
            id: Uuid::now_v7(),
            name: name.to_string(),
            email: email.to_string(),
            role: Role::User,
            avatar_url: String::new(),
            level: 1,
            points: 0,
            streak: 0,
        }
    }

    #[test]
    fn email_lookup_is_exact() {
        let store = MemoryStore::new();
        let alice = user("Alice", "alice@test.com");
        store.insert_user(alice.clone());

        assert_eq!(store.find_user_by_email("alice@test.com"), Some(alice));
        assert_eq!(store.find_user_by_email("ALICE@test.com"), None);
        assert_eq!(store.find_user_by_email("bob@test.com"), None);
    }

    #[test]
    fn tasks_list_in_creation_order_per_user() {
        let store = MemoryStore::new();
        let owner = Uuid::now_v7();
        let other = Uuid::now_v7();

        for (i, user_id) in [(0, owner), (1, other), (2, owner)] {
            store.insert_task(Task {
                id: Uuid::now_v7(),
                user_id,
                title: format!("task {i}"),
                description: String::new(),
                due_date: Utc::now().date_naive(),
                completed: false,
                points: 10,
            });
        }

        let tasks = store.list_tasks_for_user(owner);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "task 0");
        assert_eq!(tasks[1].title, "task 2");
    }

    #[test]
    fn update_task_replaces_or_reports_missing() {
        let store = MemoryStore::new();
        let mut task = Task {
            id: Uuid::now_v7(),
            user_id: Uuid::now_v7(),
            title: "before".to_string(),
            description: String::new(),
            due_date: Utc::now().date_naive(),
            completed: false,
            points: 10,
        };
        store.insert_task(task.clone());

        task.title = "after".to_string();
        let updated = store.update_task(task.clone()).unwrap();
        assert_eq!(updated.title, "after");
        assert_eq!(store.find_task(task.id).unwrap().title, "after");

        task.id = Uuid::now_v7();
        assert!(store.update_task(task).is_none());
    }

    #[test]
    fn messages_keep_insertion_order_and_unknown_rooms_are_empty() {
        let store = MemoryStore::new();
        let room_id = Uuid::now_v7();

        assert!(store.list_messages(room_id).is_empty());

        for text in ["first", "second", "third"] {
            store.append_message(ChatMessage {
                id: Uuid::now_v7(),
                room_id,
                user_id: Uuid::now_v7(),
                user_name: "Alice".to_string(),
                user_avatar: String::new(),
                text: text.to_string(),
                timestamp: Utc::now(),
            });
        }

        let texts: Vec<_> = store
            .list_messages(room_id)
            .into_iter()
            .map(|m| m.text)
            .collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn seeded_store_has_demo_fixtures() {
        let store = MemoryStore::seeded();

        let users = store.list_users();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Alice Student");
        assert_eq!(users[1].name, "Bob Admin");

        assert_eq!(store.list_tasks_for_user(super::seed::ALICE_ID).len(), 2);
        assert_eq!(store.list_habits_for_user(super::seed::ALICE_ID).len(), 2);

        let rooms = store.list_rooms();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].member_count, rooms[0].members.len());
        assert_eq!(store.list_messages(rooms[0].id).len(), 2);
    }
}
