//! Conversion logic between DTOs and domain types.

use crate::domain::{
    ConnectionId, DrawSegment, Notification, RoomId, RoomSnapshot, SessionCommand, SignalKind,
    TimerSnapshot, TimerTransition,
};
use crate::infrastructure::dto::{http, websocket as dto};

// ========================================
// DTO → Domain
// ========================================

impl From<dto::ClientEvent> for SessionCommand {
    fn from(event: dto::ClientEvent) -> Self {
        use dto::ClientEvent as E;

        match event {
            E::JoinRoom(room_id) => SessionCommand::JoinRoom {
                room_id: RoomId::from(room_id),
            },
            E::CodeChange { room_id, code } => SessionCommand::ChangeCode {
                room_id: room_id.into(),
                code,
            },
            E::LanguageChange { room_id, language } => SessionCommand::ChangeLanguage {
                room_id: room_id.into(),
                language,
            },
            E::CodeExecuted { room_id, output } => SessionCommand::ShareOutput {
                room_id: room_id.into(),
                output,
            },
            E::OutputCleared { room_id } => SessionCommand::ClearOutput {
                room_id: room_id.into(),
            },
            E::WebrtcOffer { room_id, to, offer } => signal(room_id, SignalKind::Offer, to, offer),
            E::WebrtcAnswer {
                room_id,
                to,
                answer,
            } => signal(room_id, SignalKind::Answer, to, answer),
            E::WebrtcIceCandidate {
                room_id,
                to,
                candidate,
            } => signal(room_id, SignalKind::IceCandidate, to, candidate),
            E::RequestPeers { room_id } => SessionCommand::RequestPeers {
                room_id: room_id.into(),
            },
            E::TimerStart { room_id, duration } => {
                timer(room_id, TimerTransition::Start { duration })
            }
            E::TimerPause {
                room_id,
                remaining_time,
            } => timer(room_id, TimerTransition::Pause { remaining_time }),
            E::TimerResume {
                room_id,
                remaining_time,
            } => timer(room_id, TimerTransition::Resume { remaining_time }),
            E::TimerReset { room_id, duration } => {
                timer(room_id, TimerTransition::Reset { duration })
            }
            E::WhiteboardDraw {
                room_id,
                tool,
                color,
                line_width,
                start_x,
                start_y,
                end_x,
                end_y,
            } => SessionCommand::Draw {
                room_id: room_id.into(),
                segment: DrawSegment {
                    tool,
                    color,
                    line_width,
                    start_x,
                    start_y,
                    end_x,
                    end_y,
                },
            },
            E::WhiteboardClear { room_id } => SessionCommand::ClearWhiteboard {
                room_id: room_id.into(),
            },
        }
    }
}

fn signal(
    room_id: String,
    kind: SignalKind,
    to: String,
    payload: serde_json::Value,
) -> SessionCommand {
    SessionCommand::Signal {
        room_id: room_id.into(),
        kind,
        target: ConnectionId::from(to),
        payload,
    }
}

fn timer(room_id: String, transition: TimerTransition) -> SessionCommand {
    SessionCommand::ControlTimer {
        room_id: room_id.into(),
        transition,
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<TimerSnapshot> for dto::TimerStateDto {
    fn from(snapshot: TimerSnapshot) -> Self {
        Self {
            duration: snapshot.duration,
            remaining_time: snapshot.remaining_time,
            running: snapshot.running,
        }
    }
}

impl From<&DrawSegment> for dto::DrawSegmentDto {
    fn from(segment: &DrawSegment) -> Self {
        Self {
            tool: segment.tool.clone(),
            color: segment.color.clone(),
            line_width: segment.line_width,
            start_x: segment.start_x,
            start_y: segment.start_y,
            end_x: segment.end_x,
            end_y: segment.end_y,
        }
    }
}

impl From<&Notification> for dto::ServerEvent {
    fn from(notification: &Notification) -> Self {
        use dto::ServerEvent as E;

        match notification {
            Notification::LoadCode(snapshot) => E::LoadCode {
                code: snapshot.code.clone(),
                language: snapshot.language,
                timer: snapshot.timer.map(Into::into),
            },
            Notification::UserJoined { user_count } => E::UserJoined {
                user_count: *user_count,
            },
            Notification::UserLeft { user_count } => E::UserLeft {
                user_count: *user_count,
            },
            Notification::PeerDisconnected { connection_id } => E::PeerDisconnected {
                user_id: connection_id.as_str().to_string(),
            },
            Notification::CodeUpdate(code) => E::CodeUpdate(code.clone()),
            Notification::LanguageUpdate(language) => E::LanguageUpdate(*language),
            Notification::OutputUpdate(output) => E::OutputUpdate(output.clone()),
            Notification::OutputCleared => E::OutputCleared,
            Notification::TimerStarted {
                duration,
                remaining_time,
            } => E::TimerStarted {
                duration: *duration,
                remaining_time: *remaining_time,
            },
            Notification::TimerPaused { remaining_time } => E::TimerPaused {
                remaining_time: *remaining_time,
            },
            Notification::TimerResumed { remaining_time } => E::TimerResumed {
                remaining_time: *remaining_time,
            },
            Notification::TimerReset { duration } => E::TimerReset {
                duration: *duration,
            },
            Notification::Signal {
                kind,
                from,
                payload,
            } => {
                let from = from.as_str().to_string();
                let payload = payload.clone();
                match kind {
                    SignalKind::Offer => E::WebrtcOffer {
                        from,
                        offer: payload,
                    },
                    SignalKind::Answer => E::WebrtcAnswer {
                        from,
                        answer: payload,
                    },
                    SignalKind::IceCandidate => E::WebrtcIceCandidate {
                        from,
                        candidate: payload,
                    },
                }
            }
            Notification::PeersList(peers) => E::PeersList {
                peers: peers.iter().map(|id| id.as_str().to_string()).collect(),
            },
            Notification::WhiteboardDraw(segment) => E::WhiteboardDraw(segment.into()),
            Notification::WhiteboardClear => E::WhiteboardClear,
            Notification::Error(message) => E::Error(message.clone()),
        }
    }
}

impl From<RoomSnapshot> for http::RoomSnapshotDto {
    fn from(snapshot: RoomSnapshot) -> Self {
        Self {
            code: snapshot.code,
            language: snapshot.language,
            user_count: snapshot.user_count,
        }
    }
}
