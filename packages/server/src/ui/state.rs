//! Shared application state.

use std::sync::Arc;

use codepair_shared::time::Clock;
use tokio::sync::Mutex;

use crate::{
    domain::{MessagePusher, RoomRepository},
    usecase::{
        BroadcastRouter, ConnectParticipantUseCase, ControlTimerUseCase, CreateRoomUseCase,
        DisconnectParticipantUseCase, GetRoomSnapshotUseCase, JoinRoomUseCase, RelaySignalUseCase,
        RelayWhiteboardUseCase, ShareOutputUseCase, SyncEditorUseCase,
    },
};

/// Shared application state
pub struct AppState {
    /// ConnectParticipantUseCase（接続受付のユースケース）
    pub connect_participant_usecase: Arc<ConnectParticipantUseCase>,
    /// DisconnectParticipantUseCase（切断処理のユースケース）
    pub disconnect_participant_usecase: Arc<DisconnectParticipantUseCase>,
    /// JoinRoomUseCase（Room 参加のユースケース）
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    /// SyncEditorUseCase（コード・言語同期のユースケース）
    pub sync_editor_usecase: Arc<SyncEditorUseCase>,
    /// ShareOutputUseCase（実行結果共有のユースケース）
    pub share_output_usecase: Arc<ShareOutputUseCase>,
    /// ControlTimerUseCase（タイマー操作のユースケース）
    pub control_timer_usecase: Arc<ControlTimerUseCase>,
    /// RelayWhiteboardUseCase（ホワイトボード中継のユースケース）
    pub relay_whiteboard_usecase: Arc<RelayWhiteboardUseCase>,
    /// RelaySignalUseCase（WebRTC シグナリング中継のユースケース）
    pub relay_signal_usecase: Arc<RelaySignalUseCase>,
    /// CreateRoomUseCase（Room 作成のユースケース）
    pub create_room_usecase: Arc<CreateRoomUseCase>,
    /// GetRoomSnapshotUseCase（Room スナップショット取得のユースケース）
    pub get_room_snapshot_usecase: Arc<GetRoomSnapshotUseCase>,
    /// 受信したコマンドと切断を 1 件ずつ処理するためのロック
    ///
    /// 接続ごとの受信タスクは並行に動くが、状態変更から配信までを
    /// このロックの内側で行うため、全ての接続から見たイベントの順序が一致する。
    pub dispatch_lock: Mutex<()>,
}

impl AppState {
    /// Wire every use case on top of the given ports.
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
        public_url: &str,
    ) -> Self {
        let router = Arc::new(BroadcastRouter::new(
            repository.clone(),
            message_pusher.clone(),
        ));

        Self {
            connect_participant_usecase: Arc::new(ConnectParticipantUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            disconnect_participant_usecase: Arc::new(DisconnectParticipantUseCase::new(
                repository.clone(),
                message_pusher,
                router.clone(),
                clock.clone(),
            )),
            join_room_usecase: Arc::new(JoinRoomUseCase::new(repository.clone(), router.clone())),
            sync_editor_usecase: Arc::new(SyncEditorUseCase::new(
                repository.clone(),
                router.clone(),
            )),
            share_output_usecase: Arc::new(ShareOutputUseCase::new(router.clone())),
            control_timer_usecase: Arc::new(ControlTimerUseCase::new(
                repository.clone(),
                router.clone(),
            )),
            relay_whiteboard_usecase: Arc::new(RelayWhiteboardUseCase::new(router.clone())),
            relay_signal_usecase: Arc::new(RelaySignalUseCase::new(repository.clone(), router)),
            create_room_usecase: Arc::new(CreateRoomUseCase::new(
                repository.clone(),
                clock,
                public_url,
            )),
            get_room_snapshot_usecase: Arc::new(GetRoomSnapshotUseCase::new(repository)),
            dispatch_lock: Mutex::new(()),
        }
    }
}
