//! Room Chat Service
//!
//! Fetch-on-visit message lists per room. No transport; messages live in the
//! store and are immutable once posted.

pub mod error;
pub mod handlers;
pub mod types;

pub use error::{ChatError, ChatResult};
pub use handlers::{get_messages, post_message};
pub use types::PostMessageRequest;
