//! Axum server: HTTP provisioning API and the WebSocket session endpoint.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
