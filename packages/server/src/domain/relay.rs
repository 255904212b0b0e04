//! Payloads the server relays without interpreting.

use serde_json::Value;

use super::ConnectionId;

/// One freehand whiteboard segment. Never stored server-side.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawSegment {
    pub tool: String,
    pub color: String,
    pub line_width: f64,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

/// WebRTC signaling message kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Offer,
    Answer,
    IceCandidate,
}

impl SignalKind {
    pub fn event_name(&self) -> &'static str {
        match self {
            SignalKind::Offer => "webrtc-offer",
            SignalKind::Answer => "webrtc-answer",
            SignalKind::IceCandidate => "webrtc-ice-candidate",
        }
    }
}

/// Point-to-point signaling unit: the payload is opaque to the relay.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalEnvelope {
    pub kind: SignalKind,
    pub sender: ConnectionId,
    pub target: ConnectionId,
    pub payload: Value,
}
