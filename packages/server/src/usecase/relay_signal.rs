//! UseCase: WebRTC シグナリングの中継
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RelaySignalUseCase::relay() / list_peers()
//!
//! ### なぜこのテストが必要か
//! - offer / answer / ICE candidate が宛先の接続にだけ、送信者 ID 付きで届くことを保証する
//! - ペイロードを解釈せずにそのまま中継することを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：宛先が接続中
//! - 異常系：宛先が切断済み（黙って破棄）
//! - エッジケース：参加者が自分だけの Room での peers 要求

use std::sync::Arc;

use crate::domain::{
    ConnectionId, DeliveryMode, Notification, RoomId, RoomRepository, SignalEnvelope,
};

use super::{BroadcastRouter, error::SessionError};

pub struct RelaySignalUseCase {
    repository: Arc<dyn RoomRepository>,
    router: Arc<BroadcastRouter>,
}

impl RelaySignalUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, router: Arc<BroadcastRouter>) -> Self {
        Self { repository, router }
    }

    /// シグナリングメッセージを宛先の接続にだけ中継
    ///
    /// 宛先は接続 ID だけで決まり、Room の参加状態は確認しない。
    /// 宛先に届かなかった場合は `PeerUnreachable` を返す（送信者には通知しない）。
    pub async fn relay(&self, envelope: SignalEnvelope) -> Result<(), SessionError> {
        let SignalEnvelope {
            kind,
            sender,
            target,
            payload,
        } = envelope;

        let delivered = self
            .router
            .deliver(
                &[],
                DeliveryMode::Addressed(target.clone()),
                &Notification::Signal {
                    kind,
                    from: sender,
                    payload,
                },
            )
            .await;

        if delivered.is_empty() {
            return Err(SessionError::PeerUnreachable(target));
        }
        Ok(())
    }

    /// 要求者以外の参加者 ID を `peers-list` として要求者にだけ返す
    pub async fn list_peers(
        &self,
        requester: ConnectionId,
        room_id: &RoomId,
    ) -> Result<Vec<ConnectionId>, SessionError> {
        let members = self.repository.get_members(room_id).await?;
        let peers = DeliveryMode::AllButSender(requester.clone()).resolve(&members);

        self.router
            .deliver(
                &members,
                DeliveryMode::Addressed(requester),
                &Notification::PeersList(peers.clone()),
            )
            .await;
        Ok(peers)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        domain::SignalKind, infrastructure::dto::websocket::ServerEvent,
        usecase::test_support::Harness,
    };

    fn create_usecase(harness: &Harness) -> RelaySignalUseCase {
        RelaySignalUseCase::new(harness.repository.clone(), harness.router.clone())
    }

    #[tokio::test]
    async fn test_offer_reaches_only_target_with_sender_id() {
        // テスト項目: offer が宛先にだけ、送信者 ID 付きでそのまま届く
        // given (前提条件):
        let harness = Harness::new();
        let room_id = harness.create_room().await;
        let mut alice = harness.connect_and_join("alice", &room_id).await;
        let mut bob = harness.connect_and_join("bob", &room_id).await;
        let mut charlie = harness.connect_and_join("charlie", &room_id).await;
        let usecase = create_usecase(&harness);
        let offer = json!({"type": "offer", "sdp": "v=0\r\n"});

        // when (操作):
        let result = usecase
            .relay(SignalEnvelope {
                kind: SignalKind::Offer,
                sender: alice.id.clone(),
                target: bob.id.clone(),
                payload: offer.clone(),
            })
            .await;

        // then (期待する結果):
        assert_eq!(result, Ok(()));
        assert_eq!(
            bob.drain(),
            vec![ServerEvent::WebrtcOffer {
                from: "alice".to_string(),
                offer,
            }]
        );
        assert!(alice.drain().is_empty());
        assert!(charlie.drain().is_empty());
    }

    #[tokio::test]
    async fn test_ice_candidate_to_disconnected_peer_is_dropped() {
        // テスト項目: 切断済みの宛先へのシグナリングは破棄され、送信者には何も届かない
        // given (前提条件):
        let harness = Harness::new();
        let room_id = harness.create_room().await;
        let mut alice = harness.connect_and_join("alice", &room_id).await;
        let usecase = create_usecase(&harness);

        // when (操作):
        let result = usecase
            .relay(SignalEnvelope {
                kind: SignalKind::IceCandidate,
                sender: alice.id.clone(),
                target: ConnectionId::new("gone"),
                payload: json!({"candidate": "candidate:1 1 udp 1 10.0.0.1 5000 typ host"}),
            })
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(SessionError::PeerUnreachable(ConnectionId::new("gone")))
        );
        assert!(alice.drain().is_empty());
    }

    #[tokio::test]
    async fn test_list_peers_excludes_requester() {
        // テスト項目: peers-list には要求者以外の参加者が参加順で含まれ、要求者にだけ届く
        // given (前提条件):
        let harness = Harness::new();
        let room_id = harness.create_room().await;
        let mut alice = harness.connect_and_join("alice", &room_id).await;
        let mut bob = harness.connect_and_join("bob", &room_id).await;
        let _charlie = harness.connect_and_join("charlie", &room_id).await;
        let usecase = create_usecase(&harness);

        // when (操作):
        let peers = usecase.list_peers(bob.id.clone(), &room_id).await.unwrap();

        // then (期待する結果):
        assert_eq!(
            peers,
            vec![ConnectionId::new("alice"), ConnectionId::new("charlie")]
        );
        assert_eq!(
            bob.drain(),
            vec![ServerEvent::PeersList {
                peers: vec!["alice".to_string(), "charlie".to_string()],
            }]
        );
        assert!(alice.drain().is_empty());
    }

    #[tokio::test]
    async fn test_list_peers_alone_is_empty() {
        // テスト項目: 参加者が自分だけの Room では空のリストが返る
        // given (前提条件):
        let harness = Harness::new();
        let room_id = harness.create_room().await;
        let mut alice = harness.connect_and_join("alice", &room_id).await;
        let usecase = create_usecase(&harness);

        // when (操作):
        usecase.list_peers(alice.id.clone(), &room_id).await.unwrap();

        // then (期待する結果):
        assert_eq!(alice.drain(), vec![ServerEvent::PeersList { peers: vec![] }]);
    }
}
