//! UseCase: Room スナップショットの取得（プロビジョニング API）

use std::sync::Arc;

use crate::domain::{RepositoryError, RoomId, RoomRepository, RoomSnapshot};

use super::error::GetRoomSnapshotError;

pub struct GetRoomSnapshotUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomSnapshotUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 現在のコード・言語・参加者数を返す
    pub async fn execute(&self, room_id: &RoomId) -> Result<RoomSnapshot, GetRoomSnapshotError> {
        self.repository
            .get_snapshot(room_id)
            .await
            .map_err(|e| match e {
                RepositoryError::RoomNotFound(room_id) => {
                    GetRoomSnapshotError::RoomNotFound(room_id)
                }
            })
    }
}
