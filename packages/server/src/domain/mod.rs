//! Domain layer: room state, membership, delivery rules and the ports the
//! use cases depend on.

mod command;
mod delivery;
mod entity;
mod error;
mod membership;
mod message_pusher;
mod notification;
mod registry;
mod relay;
mod repository;
mod timer;
mod value_object;

pub use command::SessionCommand;
pub use delivery::DeliveryMode;
pub use entity::{DEFAULT_CODE, Room, RoomSnapshot};
pub use error::{MembershipError, MessagePushError, RepositoryError};
pub use membership::{ConnectionState, Departure, JoinOutcome, MembershipTracker};
#[cfg(test)]
pub use message_pusher::MockMessagePusher;
pub use message_pusher::{MessagePusher, PusherChannel};
pub use notification::Notification;
pub use registry::RoomRegistry;
pub use relay::{DrawSegment, SignalEnvelope, SignalKind};
pub use repository::RoomRepository;
pub use timer::{TimerSnapshot, TimerState, TimerTransition};
pub use value_object::{
    ConnectionId, ConnectionIdFactory, Language, RoomId, RoomIdFactory, Timestamp,
};
