//! Real-time collaborative interview room relay.
//!
//! Rooms hold a shared code buffer, the selected language and a timer
//! snapshot. Participants connected over WebSocket receive each other's
//! edits, execution output and timer transitions, and use the server to
//! relay WebRTC signaling and whiteboard strokes.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
