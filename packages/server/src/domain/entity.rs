//! Room entity and its read-only projection.

use super::{ConnectionId, Language, RoomId, TimerSnapshot, TimerState, Timestamp};

/// Text every new room starts with.
pub const DEFAULT_CODE: &str = "// Start coding here...\n";

/// Room エンティティ
///
/// 共有コード・言語・参加者（接続 ID）・タイマー状態を保持する。
/// `members` は参加順で、同じ接続 ID を二度含むことはない。
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub code: String,
    pub language: Language,
    pub members: Vec<ConnectionId>,
    pub timer: TimerState,
    pub created_at: Timestamp,
    /// 最後の参加者が抜けた時刻（参加者がいる間は `None`）
    pub vacant_since: Option<Timestamp>,
}

/// Room の読み取り専用スナップショット
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSnapshot {
    pub code: String,
    pub language: Language,
    pub user_count: usize,
    pub timer: Option<TimerSnapshot>,
}

impl Room {
    /// 新しい Room をデフォルトのコードと言語で作成
    pub fn new(id: RoomId, created_at: Timestamp) -> Self {
        Self {
            id,
            code: DEFAULT_CODE.to_string(),
            language: Language::default(),
            members: Vec::new(),
            timer: TimerState::default(),
            created_at,
            vacant_since: Some(created_at),
        }
    }

    /// 参加者を追加
    ///
    /// 既に参加している場合は何もせず `false` を返す。
    pub fn add_member(&mut self, connection_id: ConnectionId) -> bool {
        if self.has_member(&connection_id) {
            return false;
        }
        self.members.push(connection_id);
        self.vacant_since = None;
        true
    }

    /// 参加者を削除
    ///
    /// 参加していなかった場合は `false` を返す。最後の参加者が抜けた場合は
    /// `at` を `vacant_since` として記録する。
    pub fn remove_member(&mut self, connection_id: &ConnectionId, at: Timestamp) -> bool {
        let Some(index) = self.members.iter().position(|id| id == connection_id) else {
            return false;
        };
        self.members.remove(index);
        if self.members.is_empty() {
            self.vacant_since = Some(at);
        }
        true
    }

    pub fn has_member(&self, connection_id: &ConnectionId) -> bool {
        self.members.contains(connection_id)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            code: self.code.clone(),
            language: self.language,
            user_count: self.member_count(),
            timer: self.timer.snapshot(),
        }
    }

    /// `ttl_millis` 以上空室のままかどうか
    pub fn is_vacant_for(&self, now: Timestamp, ttl_millis: i64) -> bool {
        self.vacant_since
            .is_some_and(|since| now.value() - since.value() >= ttl_millis)
    }
}
