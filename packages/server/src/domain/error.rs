//! ドメイン層のエラー型

use thiserror::Error;

use super::RoomId;

/// Repository 操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Room '{0}' not found")]
    RoomNotFound(RoomId),
}

/// Membership 操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MembershipError {
    #[error("Room '{0}' not found")]
    RoomNotFound(RoomId),
}

impl From<MembershipError> for RepositoryError {
    fn from(error: MembershipError) -> Self {
        match error {
            MembershipError::RoomNotFound(room_id) => RepositoryError::RoomNotFound(room_id),
        }
    }
}

/// MessagePusher 操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("Client '{0}' not found")]
    ClientNotFound(String),

    #[error("Failed to push message: {0}")]
    PushFailed(String),

    #[error("Failed to encode message: {0}")]
    EncodeFailed(String),
}
