//! Study Room Service
//!
//! Room listing, creation and capacity-checked joining.

pub mod error;
pub mod handlers;
pub mod types;

pub use error::{RoomError, RoomResult};
pub use handlers::{create_study_room, get_study_room_by_id, get_study_rooms, join_study_room};
pub use types::CreateStudyRoomRequest;
