//! UseCase テスト用のヘルパー
//!
//! 実際の InMemoryRoomRepository と WebSocketMessagePusher を組み立て、
//! 各接続に届いたフレームを `ServerEvent` として取り出せるようにする。

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, MessagePusher, RoomId, RoomRepository, Timestamp},
    infrastructure::{
        dto::websocket::ServerEvent, message_pusher::WebSocketMessagePusher,
        repository::InMemoryRoomRepository,
    },
};

use super::BroadcastRouter;

pub struct Harness {
    pub repository: Arc<InMemoryRoomRepository>,
    pub pusher: Arc<WebSocketMessagePusher>,
    pub router: Arc<BroadcastRouter>,
}

/// 1 接続分の受信側
pub struct Inbox {
    pub id: ConnectionId,
    rx: mpsc::UnboundedReceiver<String>,
}

impl Inbox {
    /// これまでに届いたイベントを全て取り出す
    pub fn drain(&mut self) -> Vec<ServerEvent> {
        let mut events = Vec::new();
        while let Ok(frame) = self.rx.try_recv() {
            events.push(serde_json::from_str(&frame).expect("frame should be a ServerEvent"));
        }
        events
    }
}

impl Harness {
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryRoomRepository::new());
        let pusher = Arc::new(WebSocketMessagePusher::new());
        let router = Arc::new(BroadcastRouter::new(repository.clone(), pusher.clone()));
        Self {
            repository,
            pusher,
            router,
        }
    }

    pub async fn create_room(&self) -> RoomId {
        self.repository.create_room(Timestamp::new(0)).await
    }

    /// 接続を登録する（Room には参加しない）
    pub async fn connect(&self, id: &str) -> Inbox {
        let id = ConnectionId::new(id);
        let (tx, rx) = mpsc::unbounded_channel();
        self.repository.register_connection(id.clone()).await;
        self.pusher.register_client(id.clone(), tx).await;
        Inbox { id, rx }
    }

    /// 接続を登録して Room に参加させ、参加時のイベントは捨てる
    pub async fn connect_and_join(&self, id: &str, room_id: &RoomId) -> Inbox {
        let mut inbox = self.connect(id).await;
        self.repository
            .join(inbox.id.clone(), room_id)
            .await
            .expect("room should exist");
        inbox.drain();
        inbox
    }
}
