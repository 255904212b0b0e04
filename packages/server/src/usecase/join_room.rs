//! UseCase: Room 参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - 参加者本人へのスナップショット送信と、他の参加者への人数通知
//!
//! ### なぜこのテストが必要か
//! - 参加者本人には `load-code` のみ、他の参加者には `user-joined` のみが
//!   届くことを保証する
//! - 存在しない Room への参加時に `error` が本人にだけ届くことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：空の Room / 既に参加者がいる Room への参加
//! - 異常系：存在しない Room への参加
//! - エッジケース：同じ Room への再参加

use std::sync::Arc;

use crate::domain::{
    ConnectionId, DeliveryMode, JoinOutcome, Notification, RepositoryError, RoomId,
    RoomRepository,
};

use super::{BroadcastRouter, error::JoinRoomError};

/// `error` イベントで参加者に返すメッセージ
pub const ROOM_NOT_FOUND_MESSAGE: &str = "Room not found";

/// Room 参加のユースケース
pub struct JoinRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    router: Arc<BroadcastRouter>,
}

impl JoinRoomUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, router: Arc<BroadcastRouter>) -> Self {
        Self { repository, router }
    }

    /// Room 参加を実行
    ///
    /// # Returns
    ///
    /// * `Ok(JoinOutcome)` - 参加成功（参加後のスナップショットと参加者リスト）
    /// * `Err(JoinRoomError)` - Room が存在しない（本人に `error` を送信済み）
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        room_id: RoomId,
    ) -> Result<JoinOutcome, JoinRoomError> {
        let outcome = match self.repository.join(connection_id.clone(), &room_id).await {
            Ok(outcome) => outcome,
            Err(RepositoryError::RoomNotFound(room_id)) => {
                self.router
                    .deliver(
                        &[],
                        DeliveryMode::Addressed(connection_id),
                        &Notification::Error(ROOM_NOT_FOUND_MESSAGE.to_string()),
                    )
                    .await;
                return Err(JoinRoomError::RoomNotFound(room_id));
            }
        };

        // 1. 参加者本人に現在のコードと言語を送信
        self.router
            .deliver(
                &outcome.members,
                DeliveryMode::Addressed(connection_id.clone()),
                &Notification::LoadCode(outcome.snapshot.clone()),
            )
            .await;

        // 2. 他の参加者に人数を通知（再参加の場合は人数が変わらないので通知しない）
        if outcome.newly_joined {
            self.router
                .deliver(
                    &outcome.members,
                    DeliveryMode::AllButSender(connection_id),
                    &Notification::UserJoined {
                        user_count: outcome.members.len(),
                    },
                )
                .await;
        }

        Ok(outcome)
    }
}
