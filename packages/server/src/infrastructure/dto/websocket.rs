//! WebSocket event DTOs.
//!
//! Every text frame is one JSON object `{"event": <name>, "data": <payload>}`.
//! Events without a payload omit `data`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::Language;

/// Client → server events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ClientEvent {
    JoinRoom(String),
    CodeChange {
        room_id: String,
        code: String,
    },
    LanguageChange {
        room_id: String,
        language: Language,
    },
    CodeExecuted {
        room_id: String,
        output: String,
    },
    OutputCleared {
        room_id: String,
    },
    WebrtcOffer {
        room_id: String,
        to: String,
        offer: Value,
    },
    WebrtcAnswer {
        room_id: String,
        to: String,
        answer: Value,
    },
    WebrtcIceCandidate {
        room_id: String,
        to: String,
        candidate: Value,
    },
    RequestPeers {
        room_id: String,
    },
    TimerStart {
        room_id: String,
        duration: u64,
    },
    TimerPause {
        room_id: String,
        remaining_time: u64,
    },
    TimerResume {
        room_id: String,
        remaining_time: u64,
    },
    TimerReset {
        room_id: String,
        duration: u64,
    },
    WhiteboardDraw {
        room_id: String,
        tool: String,
        color: String,
        line_width: f64,
        start_x: f64,
        start_y: f64,
        end_x: f64,
        end_y: f64,
    },
    WhiteboardClear {
        room_id: String,
    },
}

/// Timer state carried by `load-code` for late joiners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerStateDto {
    pub duration: u64,
    pub remaining_time: u64,
    pub running: bool,
}

/// Whiteboard segment as relayed to other clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawSegmentDto {
    pub tool: String,
    pub color: String,
    pub line_width: f64,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

/// Server → client events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ServerEvent {
    LoadCode {
        code: String,
        language: Language,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timer: Option<TimerStateDto>,
    },
    UserJoined {
        user_count: usize,
    },
    UserLeft {
        user_count: usize,
    },
    PeerDisconnected {
        user_id: String,
    },
    CodeUpdate(String),
    LanguageUpdate(Language),
    OutputUpdate(String),
    OutputCleared,
    TimerStarted {
        duration: u64,
        remaining_time: u64,
    },
    TimerPaused {
        remaining_time: u64,
    },
    TimerResumed {
        remaining_time: u64,
    },
    TimerReset {
        duration: u64,
    },
    WebrtcOffer {
        from: String,
        offer: Value,
    },
    WebrtcAnswer {
        from: String,
        answer: Value,
    },
    WebrtcIceCandidate {
        from: String,
        candidate: Value,
    },
    PeersList {
        peers: Vec<String>,
    },
    WhiteboardDraw(DrawSegmentDto),
    WhiteboardClear,
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_join_room_payload_is_plain_room_id() {
        // テスト項目: join-room の data は roomId の文字列そのもの
        // given (前提条件):
        let frame = r#"{"event":"join-room","data":"room-1"}"#;

        // when (操作):
        let event: ClientEvent = serde_json::from_str(frame).unwrap();

        // then (期待する結果):
        assert_eq!(event, ClientEvent::JoinRoom("room-1".to_string()));
    }

    #[test]
    fn test_client_fields_are_camel_case() {
        // テスト項目: 受信イベントのフィールド名は camelCase
        // given (前提条件):
        let frame = json!({
            "event": "timer-pause",
            "data": { "roomId": "r", "remainingTime": 42 }
        });

        // when (操作):
        let event: ClientEvent = serde_json::from_value(frame).unwrap();

        // then (期待する結果):
        assert_eq!(
            event,
            ClientEvent::TimerPause {
                room_id: "r".to_string(),
                remaining_time: 42
            }
        );
    }

    #[test]
    fn test_whiteboard_draw_ignores_unknown_fields() {
        // テスト項目: 未知のフィールドを含む whiteboard-draw も受け付ける
        // given (前提条件):
        let frame = json!({
            "event": "whiteboard-draw",
            "data": {
                "roomId": "r", "tool": "pen", "color": "#000000", "lineWidth": 2,
                "startX": 1.5, "startY": 2, "endX": 3, "endY": 4.25, "pressure": 0.3
            }
        });

        // when (操作):
        let event: ClientEvent = serde_json::from_value(frame).unwrap();

        // then (期待する結果):
        let ClientEvent::WhiteboardDraw {
            line_width, end_y, ..
        } = event
        else {
            panic!("expected whiteboard-draw, got {:?}", event);
        };
        assert_eq!(line_width, 2.0);
        assert_eq!(end_y, 4.25);
    }

    #[test]
    fn test_unknown_event_fails_to_parse() {
        // テスト項目: 未知のイベント名はパースに失敗する
        // given (前提条件):
        let frame = r#"{"event":"launch-rockets","data":{}}"#;

        // when (操作):
        let result = serde_json::from_str::<ClientEvent>(frame);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_payloadless_server_event_omits_data() {
        // テスト項目: ペイロードのない送信イベントは data を含まない
        // given (前提条件):
        let event = ServerEvent::OutputCleared;

        // when (操作):
        let json = serde_json::to_value(&event).unwrap();

        // then (期待する結果):
        assert_eq!(json, json!({ "event": "output-cleared" }));
    }

    #[test]
    fn test_load_code_omits_unset_timer() {
        // テスト項目: タイマー未設定の load-code は code と language のみを含む
        // given (前提条件):
        let event = ServerEvent::LoadCode {
            code: "// hi".to_string(),
            language: Language::Python,
            timer: None,
        };

        // when (操作):
        let json = serde_json::to_value(&event).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            json!({ "event": "load-code", "data": { "code": "// hi", "language": "python" } })
        );
    }

    #[test]
    fn test_signal_event_shape() {
        // テスト項目: シグナリングは from と不透明なペイロードで送信される
        // given (前提条件):
        let event = ServerEvent::WebrtcIceCandidate {
            from: "peer-a".to_string(),
            candidate: json!({ "candidate": "candidate:1 1 udp", "sdpMid": "0" }),
        };

        // when (操作):
        let json = serde_json::to_value(&event).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            json!({
                "event": "webrtc-ice-candidate",
                "data": {
                    "from": "peer-a",
                    "candidate": { "candidate": "candidate:1 1 udp", "sdpMid": "0" }
                }
            })
        );
    }
}
