//! Connection membership tracking.
//!
//! Binds the lifetime of a connection to its room memberships. The tracker
//! keeps the reverse index (connection -> rooms) so that a disconnect only
//! touches the rooms the connection actually joined.

use std::collections::HashMap;

use super::{ConnectionId, MembershipError, RoomId, RoomRegistry, RoomSnapshot, Timestamp};

/// Per-connection session state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// Connected, not a member of any room.
    #[default]
    Unjoined,
    /// Member of one or more rooms, in join order.
    Joined(Vec<RoomId>),
}

impl ConnectionState {
    fn join(self, room_id: RoomId) -> ConnectionState {
        match self {
            ConnectionState::Unjoined => ConnectionState::Joined(vec![room_id]),
            ConnectionState::Joined(mut rooms) => {
                if !rooms.contains(&room_id) {
                    rooms.push(room_id);
                }
                ConnectionState::Joined(rooms)
            }
        }
    }

    pub fn rooms(&self) -> &[RoomId] {
        match self {
            ConnectionState::Unjoined => &[],
            ConnectionState::Joined(rooms) => rooms,
        }
    }
}

/// Result of a successful join.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinOutcome {
    /// Room state as seen by the joiner right after joining.
    pub snapshot: RoomSnapshot,
    /// All members after the join, joiner included.
    pub members: Vec<ConnectionId>,
    /// `false` when the connection was already a member of the room.
    pub newly_joined: bool,
}

/// A room the connection left on disconnect.
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    pub room_id: RoomId,
    /// Members still in the room after the removal.
    pub remaining: Vec<ConnectionId>,
}

/// Reverse index from connection to the rooms it joined.
#[derive(Debug, Default)]
pub struct MembershipTracker {
    connections: HashMap<ConnectionId, ConnectionState>,
}

impl MembershipTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly opened connection as `Unjoined`.
    pub fn register(&mut self, connection_id: ConnectionId) {
        self.connections.entry(connection_id).or_default();
    }

    pub fn state(&self, connection_id: &ConnectionId) -> Option<&ConnectionState> {
        self.connections.get(connection_id)
    }

    /// Add the connection to the room's members.
    ///
    /// Rejoining a room the connection already belongs to leaves membership
    /// unchanged and reports `newly_joined = false`.
    pub fn join(
        &mut self,
        registry: &mut RoomRegistry,
        connection_id: ConnectionId,
        room_id: &RoomId,
    ) -> Result<JoinOutcome, MembershipError> {
        let newly_joined = registry
            .add_member(room_id, connection_id.clone())
            .ok_or_else(|| MembershipError::RoomNotFound(room_id.clone()))?;

        let room = registry
            .get_room(room_id)
            .ok_or_else(|| MembershipError::RoomNotFound(room_id.clone()))?;
        let outcome = JoinOutcome {
            snapshot: room.snapshot(),
            members: room.members.clone(),
            newly_joined,
        };

        let state = self.connections.remove(&connection_id).unwrap_or_default();
        self.connections
            .insert(connection_id, state.join(room_id.clone()));

        Ok(outcome)
    }

    /// Remove the connection from every room it joined and forget it.
    ///
    /// Safe to call repeatedly: an unknown connection yields no departures.
    pub fn leave(
        &mut self,
        registry: &mut RoomRegistry,
        connection_id: &ConnectionId,
        at: Timestamp,
    ) -> Vec<Departure> {
        let Some(state) = self.connections.remove(connection_id) else {
            return Vec::new();
        };

        state
            .rooms()
            .iter()
            .filter_map(|room_id| {
                match registry.remove_member(room_id, connection_id, at) {
                    Some(true) => registry.get_room(room_id).map(|room| Departure {
                        room_id: room_id.clone(),
                        remaining: room.members.clone(),
                    }),
                    _ => None,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn(id: &str) -> ConnectionId {
        ConnectionId::new(id)
    }

    #[test]
    fn test_join_existing_room() {
        // テスト項目: 存在する Room に参加すると Joined 状態になりスナップショットが返る
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let mut tracker = MembershipTracker::new();
        let room_id = registry.create_room(Timestamp::new(0));
        tracker.register(conn("a"));

        // when (操作):
        let outcome = tracker.join(&mut registry, conn("a"), &room_id).unwrap();

        // then (期待する結果):
        assert!(outcome.newly_joined);
        assert_eq!(outcome.members, vec![conn("a")]);
        assert_eq!(outcome.snapshot.user_count, 1);
        assert_eq!(
            tracker.state(&conn("a")),
            Some(&ConnectionState::Joined(vec![room_id]))
        );
    }

    #[test]
    fn test_join_missing_room_fails_without_side_effects() {
        // テスト項目: 存在しない Room への参加はエラーになり状態は変わらない
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let mut tracker = MembershipTracker::new();
        tracker.register(conn("a"));
        let missing = RoomId::new("missing");

        // when (操作):
        let result = tracker.join(&mut registry, conn("a"), &missing);

        // then (期待する結果):
        assert_eq!(result, Err(MembershipError::RoomNotFound(missing)));
        assert_eq!(tracker.state(&conn("a")), Some(&ConnectionState::Unjoined));
    }

    #[test]
    fn test_rejoin_does_not_duplicate_membership() {
        // テスト項目: 同じ Room への再参加で参加者が重複しない
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let mut tracker = MembershipTracker::new();
        let room_id = registry.create_room(Timestamp::new(0));
        tracker.join(&mut registry, conn("a"), &room_id).unwrap();

        // when (操作):
        let outcome = tracker.join(&mut registry, conn("a"), &room_id).unwrap();

        // then (期待する結果):
        assert!(!outcome.newly_joined);
        assert_eq!(outcome.members, vec![conn("a")]);
        assert_eq!(tracker.state(&conn("a")).unwrap().rooms(), &[room_id]);
    }

    #[test]
    fn test_leave_removes_from_every_joined_room() {
        // テスト項目: 切断時に参加していた全ての Room から削除される
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let mut tracker = MembershipTracker::new();
        let r1 = registry.create_room(Timestamp::new(0));
        let r2 = registry.create_room(Timestamp::new(0));
        let other = registry.create_room(Timestamp::new(0));
        tracker.join(&mut registry, conn("a"), &r1).unwrap();
        tracker.join(&mut registry, conn("b"), &r1).unwrap();
        tracker.join(&mut registry, conn("a"), &r2).unwrap();
        tracker.join(&mut registry, conn("c"), &other).unwrap();

        // when (操作):
        let departures = tracker.leave(&mut registry, &conn("a"), Timestamp::new(5));

        // then (期待する結果):
        assert_eq!(
            departures,
            vec![
                Departure {
                    room_id: r1.clone(),
                    remaining: vec![conn("b")],
                },
                Departure {
                    room_id: r2.clone(),
                    remaining: vec![],
                },
            ]
        );
        assert_eq!(registry.get_room(&other).unwrap().member_count(), 1);
        assert_eq!(
            registry.get_room(&r2).unwrap().vacant_since,
            Some(Timestamp::new(5))
        );
        assert_eq!(tracker.state(&conn("a")), None);
    }

    #[test]
    fn test_leave_is_idempotent() {
        // テスト項目: 二度目の切断処理は何もしない
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let mut tracker = MembershipTracker::new();
        let room_id = registry.create_room(Timestamp::new(0));
        tracker.join(&mut registry, conn("a"), &room_id).unwrap();
        tracker.join(&mut registry, conn("b"), &room_id).unwrap();
        tracker.leave(&mut registry, &conn("a"), Timestamp::new(1));

        // when (操作):
        let departures = tracker.leave(&mut registry, &conn("a"), Timestamp::new(2));

        // then (期待する結果):
        assert!(departures.is_empty());
        assert_eq!(registry.get_room(&room_id).unwrap().members, vec![conn("b")]);
    }
}
