//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! RoomRegistry（Room の本体）と MembershipTracker（接続 → Room の逆引き）を
//! 単一の Mutex で保護し、各操作を 1 回のロック取得で完結させます。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ConnectionId, ConnectionState, Departure, JoinOutcome, Language, MembershipTracker,
    RepositoryError, Room, RoomId, RoomRegistry, RoomRepository, RoomSnapshot, TimerState,
    TimerTransition, Timestamp,
};

#[derive(Debug, Default)]
struct SessionStore {
    registry: RoomRegistry,
    tracker: MembershipTracker,
}

/// インメモリ Room Repository 実装
#[derive(Debug, Default)]
pub struct InMemoryRoomRepository {
    store: Mutex<SessionStore>,
}

impl InMemoryRoomRepository {
    /// 新しい空の InMemoryRoomRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(room_id: &RoomId) -> RepositoryError {
    RepositoryError::RoomNotFound(room_id.clone())
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn create_room(&self, created_at: Timestamp) -> RoomId {
        let mut store = self.store.lock().await;
        store.registry.create_room(created_at)
    }

    async fn get_room(&self, room_id: &RoomId) -> Result<Room, RepositoryError> {
        let store = self.store.lock().await;
        store
            .registry
            .get_room(room_id)
            .cloned()
            .ok_or_else(|| not_found(room_id))
    }

    async fn get_snapshot(&self, room_id: &RoomId) -> Result<RoomSnapshot, RepositoryError> {
        let store = self.store.lock().await;
        store
            .registry
            .get_snapshot(room_id)
            .ok_or_else(|| not_found(room_id))
    }

    async fn get_members(&self, room_id: &RoomId) -> Result<Vec<ConnectionId>, RepositoryError> {
        let store = self.store.lock().await;
        store
            .registry
            .get_room(room_id)
            .map(|room| room.members.clone())
            .ok_or_else(|| not_found(room_id))
    }

    async fn set_code(
        &self,
        room_id: &RoomId,
        code: String,
    ) -> Result<Vec<ConnectionId>, RepositoryError> {
        let mut store = self.store.lock().await;
        store
            .registry
            .set_code(room_id, code)
            .map(|room| room.members.clone())
            .ok_or_else(|| not_found(room_id))
    }

    async fn set_language(
        &self,
        room_id: &RoomId,
        language: Language,
    ) -> Result<Vec<ConnectionId>, RepositoryError> {
        let mut store = self.store.lock().await;
        store
            .registry
            .set_language(room_id, language)
            .map(|room| room.members.clone())
            .ok_or_else(|| not_found(room_id))
    }

    async fn set_timer(
        &self,
        room_id: &RoomId,
        transition: TimerTransition,
    ) -> Result<(TimerState, Vec<ConnectionId>), RepositoryError> {
        let mut store = self.store.lock().await;
        store
            .registry
            .set_timer(room_id, transition)
            .map(|room| (room.timer, room.members.clone()))
            .ok_or_else(|| not_found(room_id))
    }

    async fn register_connection(&self, connection_id: ConnectionId) {
        let mut store = self.store.lock().await;
        store.tracker.register(connection_id);
    }

    async fn join(
        &self,
        connection_id: ConnectionId,
        room_id: &RoomId,
    ) -> Result<JoinOutcome, RepositoryError> {
        let mut store = self.store.lock().await;
        let SessionStore { registry, tracker } = &mut *store;
        Ok(tracker.join(registry, connection_id, room_id)?)
    }

    async fn leave(&self, connection_id: &ConnectionId, at: Timestamp) -> Vec<Departure> {
        let mut store = self.store.lock().await;
        let SessionStore { registry, tracker } = &mut *store;
        tracker.leave(registry, connection_id, at)
    }

    async fn connection_state(&self, connection_id: &ConnectionId) -> Option<ConnectionState> {
        let store = self.store.lock().await;
        store.tracker.state(connection_id).cloned()
    }

    async fn count_rooms(&self) -> usize {
        let store = self.store.lock().await;
        store.registry.len()
    }

    async fn remove_vacant_rooms(&self, now: Timestamp, ttl_millis: i64) -> Vec<Room> {
        let mut store = self.store.lock().await;
        store.registry.remove_vacant(now, ttl_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryRoomRepository の基本操作（作成・取得・変更・参加・離脱）
    // - 変更系メソッドが変更後の参加者リストを返すこと
    // - 存在しない Room に対する操作が RoomNotFound になること
    //
    // 【なぜこのテストが必要か】
    // - Repository は UseCase から呼ばれるデータアクセス層の中核
    // - 配信対象の算出が Repository の戻り値に依存している
    // ========================================

    fn conn(id: &str) -> ConnectionId {
        ConnectionId::new(id)
    }

    #[tokio::test]
    async fn test_create_and_get_room() {
        // テスト項目: 作成した Room を取得できる
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();

        // when (操作):
        let room_id = repo.create_room(Timestamp::new(100)).await;
        let room = repo.get_room(&room_id).await;

        // then (期待する結果):
        let room = room.unwrap();
        assert_eq!(room.id, room_id);
        assert_eq!(room.created_at, Timestamp::new(100));
        assert_eq!(repo.count_rooms().await, 1);
    }

    #[tokio::test]
    async fn test_get_missing_room_returns_not_found() {
        // テスト項目: 存在しない Room の取得は RoomNotFound を返す
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        let missing = RoomId::new("missing");

        // when (操作):
        let room = repo.get_room(&missing).await;
        let snapshot = repo.get_snapshot(&missing).await;
        let members = repo.get_members(&missing).await;

        // then (期待する結果):
        assert_eq!(room, Err(RepositoryError::RoomNotFound(missing.clone())));
        assert_eq!(snapshot, Err(RepositoryError::RoomNotFound(missing.clone())));
        assert_eq!(members, Err(RepositoryError::RoomNotFound(missing)));
    }

    #[tokio::test]
    async fn test_set_code_returns_members() {
        // テスト項目: コード変更後の参加者リストが返され、コードが上書きされる
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        let room_id = repo.create_room(Timestamp::new(0)).await;
        repo.join(conn("a"), &room_id).await.unwrap();
        repo.join(conn("b"), &room_id).await.unwrap();

        // when (操作):
        let members = repo.set_code(&room_id, "x=1".to_string()).await;

        // then (期待する結果):
        assert_eq!(members, Ok(vec![conn("a"), conn("b")]));
        assert_eq!(repo.get_snapshot(&room_id).await.unwrap().code, "x=1");
    }

    #[tokio::test]
    async fn test_set_timer_returns_new_state() {
        // テスト項目: タイマー遷移後の状態が返される
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        let room_id = repo.create_room(Timestamp::new(0)).await;

        // when (操作):
        let result = repo
            .set_timer(&room_id, TimerTransition::Start { duration: 300 })
            .await;

        // then (期待する結果):
        let (timer, members) = result.unwrap();
        assert_eq!(
            timer,
            TimerState::Running {
                duration: 300,
                remaining_time: 300
            }
        );
        assert!(members.is_empty());
    }

    #[tokio::test]
    async fn test_join_and_leave_update_connection_state() {
        // テスト項目: 参加・離脱で接続状態が遷移する
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        let room_id = repo.create_room(Timestamp::new(0)).await;
        repo.register_connection(conn("a")).await;
        let before = repo.connection_state(&conn("a")).await;

        // when (操作):
        repo.join(conn("a"), &room_id).await.unwrap();
        let joined = repo.connection_state(&conn("a")).await;
        let departures = repo.leave(&conn("a"), Timestamp::new(10)).await;
        let after = repo.connection_state(&conn("a")).await;

        // then (期待する結果):
        assert_eq!(before, Some(ConnectionState::Unjoined));
        assert_eq!(joined, Some(ConnectionState::Joined(vec![room_id.clone()])));
        assert_eq!(departures.len(), 1);
        assert_eq!(departures[0].room_id, room_id);
        assert_eq!(after, None);
    }

    #[tokio::test]
    async fn test_remove_vacant_rooms() {
        // テスト項目: 空室期間が TTL を超えた Room が削除される
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        let room_id = repo.create_room(Timestamp::new(0)).await;

        // when (操作):
        let removed = repo.remove_vacant_rooms(Timestamp::new(1_000), 1_000).await;

        // then (期待する結果):
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].id, room_id);
        assert_eq!(repo.count_rooms().await, 0);
    }
}
