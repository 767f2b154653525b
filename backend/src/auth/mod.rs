//! Authentication Service
//!
//! Demo-grade login against the hardcoded password literal, session
//! persistence, and the admin-facing user directory.

pub mod error;
pub mod handlers;
pub mod types;

pub use error::{AuthError, AuthResult};
pub use handlers::{get_users, login, logout, restore_session};
pub use types::LoginRequest;
