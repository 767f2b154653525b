//! Study Room Handlers

use sh_common::StudyRoom;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::api::AppState;
use crate::latency::{self, Op};
use crate::store::Store;

use super::error::{RoomError, RoomResult};
use super::types::CreateStudyRoomRequest;

/// All study rooms, in creation order.
#[tracing::instrument(skip(state))]
pub async fn get_study_rooms(state: &AppState) -> RoomResult<Vec<StudyRoom>> {
    latency::simulate(&state.config, Op::GetStudyRooms).await;
    Ok(state.store.list_rooms())
}

/// Look up a single room. Unknown ids are `None`, not an error.
#[tracing::instrument(skip(state))]
pub async fn get_study_room_by_id(state: &AppState, id: Uuid) -> RoomResult<Option<StudyRoom>> {
    latency::simulate(&state.config, Op::GetStudyRoomById).await;
    Ok(state.store.find_room(id))
}

/// Create a room with empty membership. Capacity is validated here but only
/// enforced against members at join time.
#[tracing::instrument(skip(state, request))]
pub async fn create_study_room(
    state: &AppState,
    request: CreateStudyRoomRequest,
) -> RoomResult<StudyRoom> {
    request
        .validate()
        .map_err(|e| RoomError::Validation(e.to_string()))?;

    latency::simulate(&state.config, Op::CreateStudyRoom).await;

    let room = StudyRoom {
        id: Uuid::now_v7(),
        name: request.name,
        description: request.description,
        members: Vec::new(),
        member_count: 0,
        max_members: request.max_members,
    };
    state.store.insert_room(room.clone());
    info!(room_id = %room.id, "Study room created");
    Ok(room)
}

/// Join a room. Joining a room the user already belongs to returns the room
/// unchanged; a full room rejects non-members.
#[tracing::instrument(skip(state))]
pub async fn join_study_room(
    state: &AppState,
    user_id: Uuid,
    room_id: Uuid,
) -> RoomResult<StudyRoom> {
    latency::simulate(&state.config, Op::JoinStudyRoom).await;

    let mut room = state.store.find_room(room_id).ok_or(RoomError::NotFound)?;

    if room.is_member(user_id) {
        debug!("Already a member, returning room unchanged");
        return Ok(room);
    }
    if room.is_full() {
        return Err(RoomError::Full);
    }

    room.push_member(user_id);
    let room = state.store.update_room(room).ok_or(RoomError::NotFound)?;
    info!(member_count = room.member_count, "User joined study room");
    Ok(room)
}
