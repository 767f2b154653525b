//! Demo Seed Data
//!
//! Fixture ids are fixed v7-form literals rather than fresh `now_v7()` values
//! per boot: the session file stores a full `User`, and a restart must keep a
//! restored session pointing at rows that still exist. The literals carry an
//! old timestamp component, so anything created at runtime sorts after them.

use chrono::{Days, Duration, Utc};
use sh_common::{ChatMessage, Frequency, Habit, Role, StudyRoom, Task, User};
use uuid::{uuid, Uuid};

use super::{MemoryStore, Store};

/// Fixture id of the demo student account (`user@test.com`).
pub const ALICE_ID: Uuid = uuid!("0192aab0-0000-7000-8000-000000000001");

/// Fixture id of the demo admin account (`admin@test.com`).
pub const BOB_ID: Uuid = uuid!("0192aab0-0000-7000-8000-000000000002");

const MATH_TASK_ID: Uuid = uuid!("0192aab0-0001-7000-8000-000000000001");
const HISTORY_TASK_ID: Uuid = uuid!("0192aab0-0001-7000-8000-000000000002");

const FLASHCARDS_HABIT_ID: Uuid = uuid!("0192aab0-0002-7000-8000-000000000001");
const NOTES_HABIT_ID: Uuid = uuid!("0192aab0-0002-7000-8000-000000000002");

const CHEMISTRY_ROOM_ID: Uuid = uuid!("0192aab0-0003-7000-8000-000000000001");
const CRAM_ROOM_ID: Uuid = uuid!("0192aab0-0003-7000-8000-000000000002");

const GREETING_MESSAGE_ID: Uuid = uuid!("0192aab0-0004-7000-8000-000000000001");
const REPLY_MESSAGE_ID: Uuid = uuid!("0192aab0-0004-7000-8000-000000000002");

/// Fill a store with the demo fixtures. Relative dates are anchored to the
/// time of the call.
pub(super) fn populate(store: &MemoryStore) {
    let now = Utc::now();
    let today = now.date_naive();

    store.insert_user(User {
        id: ALICE_ID,
        name: "Alice Student".to_string(),
        email: "user@test.com".to_string(),
        role: Role::User,
        avatar_url: "https://picsum.photos/seed/alice/100/100".to_string(),
        level: 1,
        points: 50,
        streak: 3,
    });
    store.insert_user(User {
        id: BOB_ID,
        name: "Bob Admin".to_string(),
        email: "admin@test.com".to_string(),
        role: Role::Admin,
        avatar_url: "https://picsum.photos/seed/bob/100/100".to_string(),
        level: 99,
        points: 9999,
        streak: 10,
    });

    store.insert_task(Task {
        id: MATH_TASK_ID,
        user_id: ALICE_ID,
        title: "Finish Math Homework".to_string(),
        description: "Chapter 5, problems 1-10".to_string(),
        due_date: today + Days::new(2),
        completed: false,
        points: 10,
    });
    store.insert_task(Task {
        id: HISTORY_TASK_ID,
        user_id: ALICE_ID,
        title: "Read History Chapter 3".to_string(),
        description: "Pages 50-75".to_string(),
        due_date: today + Days::new(1),
        completed: true,
        points: 10,
    });

    store.insert_habit(Habit {
        id: FLASHCARDS_HABIT_ID,
        user_id: ALICE_ID,
        title: "Review flashcards".to_string(),
        frequency: Frequency::Daily,
        streak: 5,
        last_completed: Some(now - Duration::days(1)),
        points: 5,
    });
    store.insert_habit(Habit {
        id: NOTES_HABIT_ID,
        user_id: ALICE_ID,
        title: "Organize notes".to_string(),
        frequency: Frequency::Weekly,
        streak: 2,
        last_completed: Some(now - Duration::days(6)),
        points: 15,
    });

    store.insert_room(StudyRoom {
        id: CHEMISTRY_ROOM_ID,
        name: "Organic Chemistry Help".to_string(),
        description: "Stuck on stereochemistry? Join us!".to_string(),
        members: vec![ALICE_ID],
        member_count: 1,
        max_members: 10,
    });
    store.insert_room(StudyRoom {
        id: CRAM_ROOM_ID,
        name: "Finals Cram Session".to_string(),
        description: "Silent study, pomodoro style.".to_string(),
        members: Vec::new(),
        member_count: 0,
        max_members: 20,
    });

    store.append_message(ChatMessage {
        id: GREETING_MESSAGE_ID,
        room_id: CHEMISTRY_ROOM_ID,
        user_id: ALICE_ID,
        user_name: "Alice Student".to_string(),
        user_avatar: "https://picsum.photos/seed/alice/100/100".to_string(),
        text: "Hey everyone! Ready to study?".to_string(),
        timestamp: now - Duration::minutes(5),
    });
    store.append_message(ChatMessage {
        id: REPLY_MESSAGE_ID,
        room_id: CHEMISTRY_ROOM_ID,
        user_id: BOB_ID,
        user_name: "Bob Admin".to_string(),
        user_avatar: "https://picsum.photos/seed/bob/100/100".to_string(),
        text: "Let's do it!".to_string(),
        timestamp: now - Duration::minutes(4),
    });
}
