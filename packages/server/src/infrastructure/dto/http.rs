//! HTTP API DTOs

use serde::{Deserialize, Serialize};

use crate::domain::Language;

/// Response of `POST /api/create-room`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponseDto {
    pub room_id: String,
    pub link: String,
}

/// Response of `GET /api/room/{room_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshotDto {
    pub code: String,
    pub language: Language,
    pub user_count: usize,
}

/// Error body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
}
