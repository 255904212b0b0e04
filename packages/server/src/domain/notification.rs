//! Outbound notifications, independent of the wire format.

use serde_json::Value;

use super::{ConnectionId, DrawSegment, Language, RoomSnapshot, SignalKind};

/// Server → client notification.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// Current room state, sent to a joiner only.
    LoadCode(RoomSnapshot),
    UserJoined { user_count: usize },
    UserLeft { user_count: usize },
    PeerDisconnected { connection_id: ConnectionId },
    CodeUpdate(String),
    LanguageUpdate(Language),
    OutputUpdate(String),
    OutputCleared,
    TimerStarted { duration: u64, remaining_time: u64 },
    TimerPaused { remaining_time: u64 },
    TimerResumed { remaining_time: u64 },
    TimerReset { duration: u64 },
    Signal {
        kind: SignalKind,
        from: ConnectionId,
        payload: Value,
    },
    PeersList(Vec<ConnectionId>),
    WhiteboardDraw(DrawSegment),
    WhiteboardClear,
    Error(String),
}

impl Notification {
    /// Event name on the wire, used for logging.
    pub fn event_name(&self) -> &'static str {
        match self {
            Notification::LoadCode(_) => "load-code",
            Notification::UserJoined { .. } => "user-joined",
            Notification::UserLeft { .. } => "user-left",
            Notification::PeerDisconnected { .. } => "peer-disconnected",
            Notification::CodeUpdate(_) => "code-update",
            Notification::LanguageUpdate(_) => "language-update",
            Notification::OutputUpdate(_) => "output-update",
            Notification::OutputCleared => "output-cleared",
            Notification::TimerStarted { .. } => "timer-started",
            Notification::TimerPaused { .. } => "timer-paused",
            Notification::TimerResumed { .. } => "timer-resumed",
            Notification::TimerReset { .. } => "timer-reset",
            Notification::Signal { kind, .. } => kind.event_name(),
            Notification::PeersList(_) => "peers-list",
            Notification::WhiteboardDraw(_) => "whiteboard-draw",
            Notification::WhiteboardClear => "whiteboard-clear",
            Notification::Error(_) => "error",
        }
    }
}
