//! Shared Entity Types

pub mod habit;
pub mod message;
pub mod room;
pub mod task;
pub mod user;

pub use habit::{Frequency, Habit};
pub use message::ChatMessage;
pub use room::StudyRoom;
pub use task::Task;
pub use user::{Role, User};
