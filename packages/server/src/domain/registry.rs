//! Room registry: the owned map from room id to room state.

use std::collections::HashMap;

use super::{
    ConnectionId, Language, Room, RoomId, RoomIdFactory, RoomSnapshot, TimerTransition, Timestamp,
};

/// Mapping from room id to room state.
///
/// Mutators return `None` when the room does not exist and leave the
/// registry untouched. Callers decide whether that is surfaced or dropped.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: HashMap<RoomId, Room>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh room with default text and language.
    pub fn create_room(&mut self, created_at: Timestamp) -> RoomId {
        let mut id = RoomIdFactory::generate();
        while self.rooms.contains_key(&id) {
            id = RoomIdFactory::generate();
        }
        self.rooms
            .insert(id.clone(), Room::new(id.clone(), created_at));
        id
    }

    pub fn get_room(&self, room_id: &RoomId) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    pub fn get_snapshot(&self, room_id: &RoomId) -> Option<RoomSnapshot> {
        self.rooms.get(room_id).map(Room::snapshot)
    }

    pub fn contains(&self, room_id: &RoomId) -> bool {
        self.rooms.contains_key(room_id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn set_code(&mut self, room_id: &RoomId, code: String) -> Option<&Room> {
        let room = self.rooms.get_mut(room_id)?;
        room.code = code;
        Some(room)
    }

    pub fn set_language(&mut self, room_id: &RoomId, language: Language) -> Option<&Room> {
        let room = self.rooms.get_mut(room_id)?;
        room.language = language;
        Some(room)
    }

    pub fn set_timer(&mut self, room_id: &RoomId, transition: TimerTransition) -> Option<&Room> {
        let room = self.rooms.get_mut(room_id)?;
        room.timer = room.timer.apply(transition);
        Some(room)
    }

    /// Returns `Some(true)` when the connection was newly added.
    pub fn add_member(&mut self, room_id: &RoomId, connection_id: ConnectionId) -> Option<bool> {
        self.rooms
            .get_mut(room_id)
            .map(|room| room.add_member(connection_id))
    }

    /// Returns `Some(true)` when the connection was a member and got removed.
    pub fn remove_member(
        &mut self,
        room_id: &RoomId,
        connection_id: &ConnectionId,
        at: Timestamp,
    ) -> Option<bool> {
        self.rooms
            .get_mut(room_id)
            .map(|room| room.remove_member(connection_id, at))
    }

    /// Remove rooms that have had no members for at least `ttl_millis`.
    pub fn remove_vacant(&mut self, now: Timestamp, ttl_millis: i64) -> Vec<Room> {
        let expired: Vec<RoomId> = self
            .rooms
            .values()
            .filter(|room| room.is_vacant_for(now, ttl_millis))
            .map(|room| room.id.clone())
            .collect();

        expired
            .iter()
            .filter_map(|id| self.rooms.remove(id))
            .collect()
    }
}
