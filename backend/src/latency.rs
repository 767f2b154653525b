//! Artificial Latency
//!
//! Every service operation simulates a network round trip with a fixed
//! per-operation delay, scaled by [`Config::latency_scale`]. The delay runs
//! before the operation touches the store, so a failed call never leaves a
//! partial effect behind.

use std::time::Duration;

use crate::config::Config;

/// Service operations with a simulated round-trip cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Login,
    GetUsers,
    GetTasks,
    AddTask,
    UpdateTask,
    DeleteTask,
    GetHabits,
    AddHabit,
    UpdateHabit,
    DeleteHabit,
    CompleteHabit,
    GetStudyRooms,
    GetStudyRoomById,
    CreateStudyRoom,
    JoinStudyRoom,
    GetMessages,
    PostMessage,
}

impl Op {
    /// Base round-trip cost in milliseconds.
    #[must_use]
    pub const fn millis(self) -> u64 {
        match self {
            Self::Login => 500,
            Self::GetUsers => 300,
            Self::GetTasks => 500,
            Self::AddTask => 300,
            Self::UpdateTask => 200,
            Self::DeleteTask => 300,
            Self::GetHabits => 500,
            Self::AddHabit => 300,
            Self::UpdateHabit => 200,
            Self::DeleteHabit => 300,
            Self::CompleteHabit => 300,
            Self::GetStudyRooms => 600,
            Self::GetStudyRoomById => 200,
            Self::CreateStudyRoom => 400,
            Self::JoinStudyRoom => 400,
            Self::GetMessages => 300,
            Self::PostMessage => 100,
        }
    }
}

/// Sleep for the operation's scaled delay. A zero scale skips the timer
/// entirely, which keeps tests fast.
pub async fn simulate(config: &Config, op: Op) {
    if !config.has_latency() {
        return;
    }
    let millis = (op.millis() as f64 * config.latency_scale).round() as u64;
    if millis > 0 {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }
}
