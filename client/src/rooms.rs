//! Study Room Commands

use sh_backend::rooms::{self, CreateStudyRoomRequest, RoomResult};
use sh_common::StudyRoom;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::AppState;

impl AppState {
    /// Create a room and append it to the cache. The creator is not a
    /// member until they join.
    pub async fn create_room(&self, request: CreateStudyRoomRequest) -> RoomResult<StudyRoom> {
        let room = rooms::create_study_room(&self.api, request).await?;
        self.data.write().await.rooms.push(room.clone());
        Ok(room)
    }

    /// Join a room as the current user, then refresh the whole room list so
    /// member counts stay accurate.
    pub async fn join_room(&self, room_id: Uuid) -> RoomResult<()> {
        let Some(user) = self.current_user().await else {
            debug!("No session, ignoring join");
            return Ok(());
        };

        rooms::join_study_room(&self.api, user.id, room_id).await?;
        let rooms = rooms::get_study_rooms(&self.api).await?;
        self.data.write().await.rooms = rooms;
        Ok(())
    }

    /// Load a single room. Unknown rooms and failures both come back as
    /// `None`; failures are logged.
    pub async fn room_details(&self, room_id: Uuid) -> Option<StudyRoom> {
        match rooms::get_study_room_by_id(&self.api, room_id).await {
            Ok(room) => room,
            Err(err) => {
                warn!("Failed to load room details: {err}");
                None
            }
        }
    }
}
