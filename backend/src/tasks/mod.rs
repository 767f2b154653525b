//! Task Service
//!
//! Per-user to-do CRUD with simulated latency.

pub mod error;
pub mod handlers;
pub mod types;

pub use error::{TaskError, TaskResult};
pub use handlers::{add_task, delete_task, get_tasks, update_task};
pub use types::AddTaskRequest;
