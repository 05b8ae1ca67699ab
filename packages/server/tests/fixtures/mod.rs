//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc, time::Duration};

use futures_util::StreamExt;
use irori_server::{
    create_router, infrastructure::repository::InMemoryMailboxRegistry, ui::state::AppState,
    usecase::ChatRoom,
};
use tokio::{net::TcpListener, task::JoinHandle};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

pub type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// Server bound to an ephemeral local port, stopped on drop
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let room = ChatRoom::new(Arc::new(InMemoryMailboxRegistry::new()));
        let app = create_router(Arc::new(AppState::new(room, 0)));
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn ws_url(&self, name: &str) -> String {
        format!("ws://{}/ws?name={}", self.addr, name)
    }

    pub async fn connect(&self, name: &str) -> WsStream {
        let (stream, _) = connect_async(self.ws_url(name))
            .await
            .expect("Failed to connect WebSocket");
        stream
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Read the next text frame, failing the test after one second
pub async fn next_text(stream: &mut WsStream) -> String {
    let message = tokio::time::timeout(Duration::from_secs(1), stream.next())
        .await
        .expect("Did not receive a message within the timeout")
        .expect("WebSocket closed")
        .expect("WebSocket error");
    message
        .into_text()
        .expect("Expected a text frame")
        .as_str()
        .to_string()
}
