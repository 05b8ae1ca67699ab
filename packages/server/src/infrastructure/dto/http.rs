//! HTTP API response DTOs for the chat room.

use serde::{Deserialize, Serialize};

/// Room summary for the room endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub participant_count: usize,
    pub created_at: String, // ISO 8601
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}
