//! `Studyhall` Mock Backend
//!
//! Simulates a remote API surface over in-memory collections: every operation
//! is async, preceded by a fixed artificial delay, and scoped to the entity
//! invariants of the Studyhall domain. The only durable state is a JSON
//! session file holding the authenticated user.

pub mod api;
pub mod auth;
pub mod chat;
pub mod config;
pub mod habits;
pub mod latency;
pub mod rooms;
pub mod session;
pub mod store;
pub mod tasks;
