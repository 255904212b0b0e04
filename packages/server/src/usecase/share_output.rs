//! UseCase: 実行結果の共有
//!
//! 実行結果とクリアは送信者を含む全参加者に配信する。表示される出力の
//! 唯一の経路がこの配信になるよう、送信者自身もローカルでは描画しない。

use std::sync::Arc;

use crate::domain::{ConnectionId, DeliveryMode, Notification, RoomId};

use super::{BroadcastRouter, error::SessionError};

/// 実行結果共有のユースケース
pub struct ShareOutputUseCase {
    router: Arc<BroadcastRouter>,
}

impl ShareOutputUseCase {
    pub fn new(router: Arc<BroadcastRouter>) -> Self {
        Self { router }
    }

    /// `output-update` を全参加者に配信
    pub async fn share(
        &self,
        room_id: &RoomId,
        output: String,
    ) -> Result<Vec<ConnectionId>, SessionError> {
        self.router
            .deliver_to_room(
                room_id,
                DeliveryMode::AllIncludingSender,
                &Notification::OutputUpdate(output),
            )
            .await
    }

    /// `output-cleared` を全参加者に配信
    pub async fn clear(&self, room_id: &RoomId) -> Result<Vec<ConnectionId>, SessionError> {
        self.router
            .deliver_to_room(
                room_id,
                DeliveryMode::AllIncludingSender,
                &Notification::OutputCleared,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{infrastructure::dto::websocket::ServerEvent, usecase::test_support::Harness};

    #[tokio::test]
    async fn test_output_reaches_sender_and_others() {
        // テスト項目: 実行結果は送信者を含む全参加者に同じ内容で届く
        // given (前提条件):
        let harness = Harness::new();
        let room_id = harness.create_room().await;
        let mut alice = harness.connect_and_join("alice", &room_id).await;
        let mut bob = harness.connect_and_join("bob", &room_id).await;
        let usecase = ShareOutputUseCase::new(harness.router.clone());

        // when (操作):
        usecase.share(&room_id, "Hello\n".to_string()).await.unwrap();

        // then (期待する結果):
        let expected = vec![ServerEvent::OutputUpdate("Hello\n".to_string())];
        assert_eq!(alice.drain(), expected);
        assert_eq!(bob.drain(), expected);
    }

    #[tokio::test]
    async fn test_clear_reaches_everyone() {
        // テスト項目: output-cleared は送信者を含む全参加者に届く
        // given (前提条件):
        let harness = Harness::new();
        let room_id = harness.create_room().await;
        let mut alice = harness.connect_and_join("alice", &room_id).await;
        let mut bob = harness.connect_and_join("bob", &room_id).await;
        let usecase = ShareOutputUseCase::new(harness.router.clone());

        // when (操作):
        let delivered = usecase.clear(&room_id).await.unwrap();

        // then (期待する結果):
        assert_eq!(delivered.len(), 2);
        assert_eq!(alice.drain(), vec![ServerEvent::OutputCleared]);
        assert_eq!(bob.drain(), vec![ServerEvent::OutputCleared]);
    }

    #[tokio::test]
    async fn test_output_for_missing_room_is_dropped() {
        // テスト項目: 存在しない Room への実行結果は誰にも届かない
        // given (前提条件):
        let harness = Harness::new();
        let room_id = harness.create_room().await;
        let mut alice = harness.connect_and_join("alice", &room_id).await;
        let usecase = ShareOutputUseCase::new(harness.router.clone());

        // when (操作):
        let result = usecase.share(&RoomId::new("missing"), "x".to_string()).await;

        // then (期待する結果):
        assert!(matches!(result, Err(SessionError::RoomNotFound(_))));
        assert!(alice.drain().is_empty());
    }
}
