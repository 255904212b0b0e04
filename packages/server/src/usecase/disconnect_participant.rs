//! UseCase: 参加者切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectParticipantUseCase::execute() メソッド
//! - 参加していた全ての Room からの削除と、残りの参加者への通知
//!
//! ### なぜこのテストが必要か
//! - 切断時に各 Room の人数がちょうど 1 回ずつ減ることを保証
//! - 二度目の切断処理で通知が重複しないこと（冪等性）を確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：複数 Room に参加している接続の切断
//! - エッジケース：最後の参加者の切断、未参加の接続の切断、二重の切断

use std::sync::Arc;

use codepair_shared::time::Clock;

use crate::domain::{
    ConnectionId, DeliveryMode, Departure, MessagePusher, Notification, RoomRepository, Timestamp,
};

use super::BroadcastRouter;

/// 参加者切断のユースケース
pub struct DisconnectParticipantUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    router: Arc<BroadcastRouter>,
    clock: Arc<dyn Clock>,
}

impl DisconnectParticipantUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        router: Arc<BroadcastRouter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            router,
            clock,
        }
    }

    /// 参加者切断を実行
    ///
    /// # Returns
    ///
    /// 接続が抜けた Room のリスト（既に切断済みなら空）
    pub async fn execute(&self, connection_id: &ConnectionId) -> Vec<Departure> {
        // 1. MessagePusher から登録解除（以降この接続には何も送らない）
        self.message_pusher.unregister_client(connection_id).await;

        // 2. 参加していた全ての Room から削除
        let departures = self
            .repository
            .leave(connection_id, Timestamp::new(self.clock.now_millis()))
            .await;

        // 3. 各 Room の残りの参加者に人数と切断を通知
        for departure in &departures {
            self.router
                .deliver(
                    &departure.remaining,
                    DeliveryMode::AllIncludingSender,
                    &Notification::UserLeft {
                        user_count: departure.remaining.len(),
                    },
                )
                .await;
            self.router
                .deliver(
                    &departure.remaining,
                    DeliveryMode::AllIncludingSender,
                    &Notification::PeerDisconnected {
                        connection_id: connection_id.clone(),
                    },
                )
                .await;
            tracing::info!(
                "Connection '{}' left room '{}' ({} remaining)",
                connection_id,
                departure.room_id,
                departure.remaining.len()
            );
        }

        departures
    }
}
