//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::{ConnectionId, RepositoryError, RoomId};

/// join-room のエラー（参加者本人に通知される）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinRoomError {
    #[error("Room '{0}' not found")]
    RoomNotFound(RoomId),
}

/// Room スナップショット取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomSnapshotError {
    #[error("Room '{0}' not found")]
    RoomNotFound(RoomId),
}

/// join 以外のセッション操作のエラー
///
/// 送信者には通知されず、ログにのみ記録される。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Room '{0}' not found")]
    RoomNotFound(RoomId),

    #[error("Peer '{0}' is not connected")]
    PeerUnreachable(ConnectionId),
}

impl From<RepositoryError> for SessionError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::RoomNotFound(room_id) => SessionError::RoomNotFound(room_id),
        }
    }
}
