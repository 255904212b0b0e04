//! UseCase: エディタ同期（コード・言語の変更）
//!
//! 変更は Room の値を上書きし（最後の書き込みが勝つ）、送信者以外の参加者に
//! 配信する。送信者のエディタは既に最新の値を持っているため送り返さない。

use std::sync::Arc;

use crate::domain::{ConnectionId, DeliveryMode, Language, Notification, RoomId, RoomRepository};

use super::{BroadcastRouter, error::SessionError};

/// エディタ同期のユースケース
pub struct SyncEditorUseCase {
    repository: Arc<dyn RoomRepository>,
    router: Arc<BroadcastRouter>,
}

impl SyncEditorUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, router: Arc<BroadcastRouter>) -> Self {
        Self { repository, router }
    }

    /// コード変更を反映し、送信者以外に `code-update` を配信
    pub async fn change_code(
        &self,
        sender: ConnectionId,
        room_id: &RoomId,
        code: String,
    ) -> Result<Vec<ConnectionId>, SessionError> {
        let members = self.repository.set_code(room_id, code.clone()).await?;

        Ok(self
            .router
            .deliver(
                &members,
                DeliveryMode::AllButSender(sender),
                &Notification::CodeUpdate(code),
            )
            .await)
    }

    /// 言語変更を反映し、送信者以外に `language-update` を配信
    pub async fn change_language(
        &self,
        sender: ConnectionId,
        room_id: &RoomId,
        language: Language,
    ) -> Result<Vec<ConnectionId>, SessionError> {
        let members = self.repository.set_language(room_id, language).await?;

        Ok(self
            .router
            .deliver(
                &members,
                DeliveryMode::AllButSender(sender),
                &Notification::LanguageUpdate(language),
            )
            .await)
    }
}
