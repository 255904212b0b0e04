//! Delivery-set computation for outbound events.

use super::ConnectionId;

/// Who receives an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Every room member except the originating connection.
    AllButSender(ConnectionId),
    /// Every room member, the originating connection included.
    AllIncludingSender,
    /// Exactly one connection, addressed by id regardless of room membership.
    Addressed(ConnectionId),
}

impl DeliveryMode {
    /// Resolve the delivery set against the room's members.
    ///
    /// Members are returned in join order.
    pub fn resolve(&self, members: &[ConnectionId]) -> Vec<ConnectionId> {
        match self {
            DeliveryMode::AllButSender(sender) => members
                .iter()
                .filter(|id| *id != sender)
                .cloned()
                .collect(),
            DeliveryMode::AllIncludingSender => members.to_vec(),
            DeliveryMode::Addressed(target) => vec![target.clone()],
        }
    }
}
