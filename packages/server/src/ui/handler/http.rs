//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::RoomId,
    infrastructure::dto::http::{CreateRoomResponseDto, ErrorResponseDto, RoomSnapshotDto},
    ui::state::AppState,
    usecase::{GetRoomSnapshotError, ROOM_NOT_FOUND_MESSAGE},
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Create a room with the default code and language
pub async fn create_room(State(state): State<Arc<AppState>>) -> Json<CreateRoomResponseDto> {
    let created = state.create_room_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(CreateRoomResponseDto {
        room_id: created.room_id.into_string(),
        link: created.link,
    })
}

/// Get the current code, language and participant count of a room
pub async fn get_room_snapshot(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomSnapshotDto>, (StatusCode, Json<ErrorResponseDto>)> {
    match state
        .get_room_snapshot_usecase
        .execute(&RoomId::new(room_id))
        .await
    {
        Ok(snapshot) => Ok(Json(snapshot.into())),
        Err(GetRoomSnapshotError::RoomNotFound(room_id)) => {
            tracing::debug!("Snapshot requested for unknown room '{}'", room_id);
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponseDto {
                    error: ROOM_NOT_FOUND_MESSAGE.to_string(),
                }),
            ))
        }
    }
}
