//! WebSocket connection handlers.
//!
//! Each connection resolves a participant name, subscribes to the room, then
//! runs two tasks: one forwarding the mailbox to the socket as rendered text
//! frames, one feeding received text frames into the room. When either ends
//! the other is aborted and the participant is unsubscribed.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{Message as WsMessage, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};

use crate::{
    domain::{Message, ParticipantName, ParticipantNameFactory, ValueObjectError},
    ui::state::{AppState, ConnectQuery},
    usecase::ChatRoom,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state, query.name))
}

/// Participant name chosen for a connection, with the notice to send first
/// when the requested name could not be used.
struct NameResolution {
    name: ParticipantName,
    notice: Option<Message>,
}

async fn resolve_name(
    room: &ChatRoom,
    requested: Option<String>,
) -> Result<NameResolution, ValueObjectError> {
    let Some(requested) = requested.filter(|name| !name.is_empty()) else {
        return Ok(NameResolution {
            name: generate_available_name(room).await?,
            notice: None,
        });
    };

    let notice_reason = match ParticipantName::new(requested.clone()) {
        Ok(name) => {
            if room.is_name_available(name.as_str()).await {
                return Ok(NameResolution { name, notice: None });
            }
            "is already taken"
        }
        Err(_) => "is invalid",
    };

    let name = generate_available_name(room).await?;
    let notice = Message::server(format!(
        "name {requested} {notice_reason}, taking {name} instead"
    ));
    Ok(NameResolution {
        name,
        notice: Some(notice),
    })
}

async fn generate_available_name(room: &ChatRoom) -> Result<ParticipantName, ValueObjectError> {
    loop {
        let name = ParticipantNameFactory::generate()?;
        if room.is_name_available(name.as_str()).await {
            return Ok(name);
        }
    }
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, requested: Option<String>) {
    let (mut sender, mut receiver) = socket.split();

    let NameResolution { name, notice } = match resolve_name(&state.room, requested).await {
        Ok(resolution) => resolution,
        Err(e) => {
            tracing::error!("Failed to pick a participant name: {}", e);
            return;
        }
    };

    if let Some(notice) = notice
        && let Err(e) = sender.send(WsMessage::Text(notice.to_string().into())).await
    {
        tracing::warn!("Failed to send name notice to '{}': {}", name, e);
        return;
    }

    let mut mailbox = state.room.subscribe(name.clone()).await;

    // Spawn a task to forward mailbox messages to this client
    let mut send_task = tokio::spawn(async move {
        while let Some(message) = mailbox.recv().await {
            if sender
                .send(WsMessage::Text(message.to_string().into()))
                .await
                .is_err()
            {
                break;
            }
        }
    });

    let name_clone = name.clone();
    let state_clone = state.clone();

    // Spawn a task to receive messages from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error for '{}': {}", name_clone, e);
                    break;
                }
            };

            match msg {
                WsMessage::Text(text) => {
                    if let Err(e) = state_clone.room.say(&name_clone, text.as_str()).await {
                        tracing::warn!("Failed to accept message from '{}': {}", name_clone, e);
                        break;
                    }
                }
                WsMessage::Close(_) => {
                    tracing::debug!("Client '{}' requested close", name_clone);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    state.room.unsubscribe(name.as_str()).await;
}
