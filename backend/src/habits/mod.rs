//! Habit Service
//!
//! Recurring-habit CRUD and streak completion with simulated latency.

pub mod error;
pub mod handlers;
pub mod types;

pub use error::{HabitError, HabitResult};
pub use handlers::{add_habit, complete_habit, delete_habit, get_habits, update_habit};
pub use types::AddHabitRequest;
