//! Broadcast router.
//!
//! Computes the delivery set of an event from the room's members and the
//! event's delivery mode, then hands it to the message pusher. Delivery is
//! fire-and-forget: failures are logged and never retried.

use std::sync::Arc;

use crate::domain::{
    ConnectionId, DeliveryMode, MessagePusher, Notification, RoomId, RoomRepository,
};

use super::error::SessionError;

pub struct BroadcastRouter {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl BroadcastRouter {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// Deliver `notification` to the members selected by `mode`.
    ///
    /// Returns the connections the notification was handed to.
    pub async fn deliver(
        &self,
        members: &[ConnectionId],
        mode: DeliveryMode,
        notification: &Notification,
    ) -> Vec<ConnectionId> {
        if let DeliveryMode::Addressed(target) = &mode {
            return match self.message_pusher.push_to(target, notification).await {
                Ok(()) => vec![target.clone()],
                Err(e) => {
                    tracing::debug!(
                        "Dropped '{}' addressed to '{}': {}",
                        notification.event_name(),
                        target,
                        e
                    );
                    Vec::new()
                }
            };
        }

        let targets = mode.resolve(members);
        if targets.is_empty() {
            return targets;
        }

        match self.message_pusher.broadcast(&targets, notification).await {
            Ok(delivered) => delivered,
            Err(e) => {
                tracing::warn!("Failed to broadcast '{}': {}", notification.event_name(), e);
                Vec::new()
            }
        }
    }

    /// Look up the room's members and deliver to them.
    pub async fn deliver_to_room(
        &self,
        room_id: &RoomId,
        mode: DeliveryMode,
        notification: &Notification,
    ) -> Result<Vec<ConnectionId>, SessionError> {
        let members = self.repository.get_members(room_id).await?;
        Ok(self.deliver(&members, mode, notification).await)
    }
}
