//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};
use irori_shared::time::timestamp_to_jst_rfc3339;

use crate::{
    infrastructure::dto::http::{HealthDto, RoomSummaryDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

/// Get a summary of the room
pub async fn get_room(State(state): State<Arc<AppState>>) -> Json<RoomSummaryDto> {
    let participant_count = state.room.participant_count().await;

    Json(RoomSummaryDto {
        participant_count,
        created_at: timestamp_to_jst_rfc3339(state.created_at).unwrap_or_default(),
    })
}
