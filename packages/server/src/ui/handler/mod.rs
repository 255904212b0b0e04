//! Request handlers.

mod http;
mod session;
mod websocket;

pub use http::{create_room, get_room_snapshot, health_check};
pub use websocket::websocket_handler;
