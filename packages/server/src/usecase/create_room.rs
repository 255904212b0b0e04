//! UseCase: Room 作成（プロビジョニング API）

use std::sync::Arc;

use codepair_shared::time::Clock;

use crate::domain::{RoomId, RoomRepository, Timestamp};

/// 作成された Room と、フロントエンドで開くための共有リンク
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRoom {
    pub room_id: RoomId,
    pub link: String,
}

/// Room 作成のユースケース
pub struct CreateRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    clock: Arc<dyn Clock>,
    /// 共有リンクの基底 URL（末尾の `/` は除去済み）
    public_url: String,
}

impl CreateRoomUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        clock: Arc<dyn Clock>,
        public_url: impl Into<String>,
    ) -> Self {
        let public_url = public_url.into().trim_end_matches('/').to_string();
        Self {
            repository,
            clock,
            public_url,
        }
    }

    /// デフォルトのコードと言語で新しい Room を作成
    pub async fn execute(&self) -> CreatedRoom {
        let created_at = Timestamp::new(self.clock.now_millis());
        let room_id = self.repository.create_room(created_at).await;
        let link = format!("{}/room/{}", self.public_url, room_id);
        tracing::info!("Room '{}' created", room_id);
        CreatedRoom { room_id, link }
    }
}
