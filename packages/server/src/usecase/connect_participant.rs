//! UseCase: 接続受付処理
//!
//! WebSocket のアップグレード直後に呼ばれ、接続を未参加状態で登録し、
//! 送信チャンネルを MessagePusher に登録する。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, PusherChannel, RoomRepository};

/// 接続受付のユースケース
pub struct ConnectParticipantUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectParticipantUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 接続を登録
    pub async fn execute(&self, connection_id: ConnectionId, sender: PusherChannel) {
        self.repository
            .register_connection(connection_id.clone())
            .await;
        self.message_pusher
            .register_client(connection_id, sender)
            .await;
    }
}
