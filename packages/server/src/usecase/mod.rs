//! UseCase layer: one use case per session operation.
//!
//! Every use case depends only on the domain ports (`RoomRepository`,
//! `MessagePusher`) and the `BroadcastRouter` built on top of them.

mod broadcast;
mod connect_participant;
mod control_timer;
mod create_room;
mod disconnect_participant;
pub mod error;
mod get_room_snapshot;
mod join_room;
mod reclaim_rooms;
mod relay_signal;
mod relay_whiteboard;
mod share_output;
mod sync_editor;

#[cfg(test)]
pub(crate) mod test_support;

pub use broadcast::BroadcastRouter;
pub use connect_participant::ConnectParticipantUseCase;
pub use control_timer::ControlTimerUseCase;
pub use create_room::{CreateRoomUseCase, CreatedRoom};
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use error::{GetRoomSnapshotError, JoinRoomError, SessionError};
pub use get_room_snapshot::GetRoomSnapshotUseCase;
pub use join_room::{JoinRoomUseCase, ROOM_NOT_FOUND_MESSAGE};
pub use reclaim_rooms::ReclaimVacantRoomsUseCase;
pub use relay_signal::RelaySignalUseCase;
pub use relay_whiteboard::RelayWhiteboardUseCase;
pub use share_output::ShareOutputUseCase;
pub use sync_editor::SyncEditorUseCase;
