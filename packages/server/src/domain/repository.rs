//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! 各メソッドは 1 回の呼び出しで完結するアトミックな操作です。変更系の
//! メソッドは変更後の参加者リストを返し、呼び出し側はそれを配信対象の
//! 算出に使います（変更と配信対象の読み取りの間に他の操作が割り込まない）。

use async_trait::async_trait;

use super::{
    ConnectionId, ConnectionState, Departure, JoinOutcome, Language, RepositoryError, Room,
    RoomId, RoomSnapshot, TimerState, TimerTransition, Timestamp,
};

/// Room Repository trait
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// 新しい Room を作成して ID を返す
    async fn create_room(&self, created_at: Timestamp) -> RoomId;

    /// Room エンティティを取得
    async fn get_room(&self, room_id: &RoomId) -> Result<Room, RepositoryError>;

    /// Room のスナップショットを取得
    async fn get_snapshot(&self, room_id: &RoomId) -> Result<RoomSnapshot, RepositoryError>;

    /// Room の参加者リストを取得（参加順）
    async fn get_members(&self, room_id: &RoomId) -> Result<Vec<ConnectionId>, RepositoryError>;

    /// コードを上書きし、参加者リストを返す
    async fn set_code(
        &self,
        room_id: &RoomId,
        code: String,
    ) -> Result<Vec<ConnectionId>, RepositoryError>;

    /// 言語を上書きし、参加者リストを返す
    async fn set_language(
        &self,
        room_id: &RoomId,
        language: Language,
    ) -> Result<Vec<ConnectionId>, RepositoryError>;

    /// タイマーを遷移させ、遷移後の状態と参加者リストを返す
    async fn set_timer(
        &self,
        room_id: &RoomId,
        transition: TimerTransition,
    ) -> Result<(TimerState, Vec<ConnectionId>), RepositoryError>;

    /// 新しい接続を未参加状態で登録
    async fn register_connection(&self, connection_id: ConnectionId);

    /// 接続を Room に参加させる
    async fn join(
        &self,
        connection_id: ConnectionId,
        room_id: &RoomId,
    ) -> Result<JoinOutcome, RepositoryError>;

    /// 接続を参加中の全ての Room から外す（冪等）
    async fn leave(&self, connection_id: &ConnectionId, at: Timestamp) -> Vec<Departure>;

    /// 接続の状態を取得（未登録なら `None`）
    async fn connection_state(&self, connection_id: &ConnectionId) -> Option<ConnectionState>;

    /// 登録されている Room の数
    async fn count_rooms(&self) -> usize;

    /// `ttl_millis` 以上空室の Room を削除し、削除した Room を返す
    async fn remove_vacant_rooms(&self, now: Timestamp, ttl_millis: i64) -> Vec<Room>;
}
