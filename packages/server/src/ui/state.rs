//! Server state shared by the handlers.

use serde::Deserialize;

use crate::usecase::ChatRoom;

/// Query parameters for WebSocket connection
#[derive(Debug, Deserialize)]
pub struct ConnectQuery {
    /// Requested participant name; a name is generated when absent or empty
    pub name: Option<String>,
}

/// Shared application state
pub struct AppState {
    /// The single chat room
    pub room: ChatRoom,
    /// Unix timestamp when the room was created (milliseconds)
    pub created_at: i64,
}

impl AppState {
    pub fn new(room: ChatRoom, created_at: i64) -> Self {
        Self { room, created_at }
    }
}
