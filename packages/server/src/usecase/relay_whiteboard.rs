//! UseCase: ホワイトボードの中継
//!
//! 描画はサーバーに保存されない。後から参加したクライアントは空のキャンバスから始まる。

use std::sync::Arc;

use crate::domain::{ConnectionId, DeliveryMode, DrawSegment, Notification, RoomId};

use super::{BroadcastRouter, error::SessionError};

pub struct RelayWhiteboardUseCase {
    router: Arc<BroadcastRouter>,
}

impl RelayWhiteboardUseCase {
    pub fn new(router: Arc<BroadcastRouter>) -> Self {
        Self { router }
    }

    /// 線分を送信者以外に中継
    pub async fn draw(
        &self,
        sender: ConnectionId,
        room_id: &RoomId,
        segment: DrawSegment,
    ) -> Result<Vec<ConnectionId>, SessionError> {
        self.router
            .deliver_to_room(
                room_id,
                DeliveryMode::AllButSender(sender),
                &Notification::WhiteboardDraw(segment),
            )
            .await
    }

    /// キャンバスのクリアを送信者以外に中継
    pub async fn clear(
        &self,
        sender: ConnectionId,
        room_id: &RoomId,
    ) -> Result<Vec<ConnectionId>, SessionError> {
        self.router
            .deliver_to_room(
                room_id,
                DeliveryMode::AllButSender(sender),
                &Notification::WhiteboardClear,
            )
            .await
    }
}
