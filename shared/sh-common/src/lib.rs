//! `Studyhall` Common Library
//!
//! Shared entity types and the level/points domain used by both the mock
//! backend and the client state layer.

pub mod levels;
pub mod types;

pub use types::*;
