//! Inbound session commands, one per client event kind.

use serde_json::Value;

use super::{ConnectionId, DrawSegment, Language, RoomId, SignalKind, TimerTransition};

/// Client → server command, already decoded from the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    JoinRoom {
        room_id: RoomId,
    },
    ChangeCode {
        room_id: RoomId,
        code: String,
    },
    ChangeLanguage {
        room_id: RoomId,
        language: Language,
    },
    ShareOutput {
        room_id: RoomId,
        output: String,
    },
    ClearOutput {
        room_id: RoomId,
    },
    ControlTimer {
        room_id: RoomId,
        transition: TimerTransition,
    },
    Draw {
        room_id: RoomId,
        segment: DrawSegment,
    },
    ClearWhiteboard {
        room_id: RoomId,
    },
    Signal {
        room_id: RoomId,
        kind: SignalKind,
        target: ConnectionId,
        payload: Value,
    },
    RequestPeers {
        room_id: RoomId,
    },
}

impl SessionCommand {
    pub fn room_id(&self) -> &RoomId {
        match self {
            SessionCommand::JoinRoom { room_id }
            | SessionCommand::ChangeCode { room_id, .. }
            | SessionCommand::ChangeLanguage { room_id, .. }
            | SessionCommand::ShareOutput { room_id, .. }
            | SessionCommand::ClearOutput { room_id }
            | SessionCommand::ControlTimer { room_id, .. }
            | SessionCommand::Draw { room_id, .. }
            | SessionCommand::ClearWhiteboard { room_id }
            | SessionCommand::Signal { room_id, .. }
            | SessionCommand::RequestPeers { room_id } => room_id,
        }
    }

    /// Event name of the inbound frame, used for logging.
    pub fn event_name(&self) -> &'static str {
        match self {
            SessionCommand::JoinRoom { .. } => "join-room",
            SessionCommand::ChangeCode { .. } => "code-change",
            SessionCommand::ChangeLanguage { .. } => "language-change",
            SessionCommand::ShareOutput { .. } => "code-executed",
            SessionCommand::ClearOutput { .. } => "output-cleared",
            SessionCommand::ControlTimer { transition, .. } => match transition {
                TimerTransition::Start { .. } => "timer-start",
                TimerTransition::Pause { .. } => "timer-pause",
                TimerTransition::Resume { .. } => "timer-resume",
                TimerTransition::Reset { .. } => "timer-reset",
            },
            SessionCommand::Draw { .. } => "whiteboard-draw",
            SessionCommand::ClearWhiteboard { .. } => "whiteboard-clear",
            SessionCommand::Signal { kind, .. } => kind.event_name(),
            SessionCommand::RequestPeers { .. } => "request-peers",
        }
    }
}
