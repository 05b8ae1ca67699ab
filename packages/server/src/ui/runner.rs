//! Router construction and server startup.

use std::sync::Arc;

use axum::{Router, routing::get};
use irori_shared::time::get_jst_timestamp;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{infrastructure::repository::InMemoryMailboxRegistry, usecase::ChatRoom};

use super::{
    config::ServerConfig,
    error::ServerError,
    handler::{get_room, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Build the application router around `state`.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ws", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/room", get(get_room))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create the room and serve until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let repository = Arc::new(InMemoryMailboxRegistry::new());
    let room = ChatRoom::new(repository);
    let state = Arc::new(AppState::new(room, get_jst_timestamp()));
    let app = create_router(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!("Server starting on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Server stopped");
    Ok(())
}
