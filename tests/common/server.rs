//! Real server helpers for socket tests
//!
//! Starts the full application on `127.0.0.1:0` and talks to it with
//! `tokio-tungstenite`, the same client library the desktop app uses.

use std::net::SocketAddr;

use futures_util::{SinkExt, StreamExt};
use tempfile::TempDir;
use tokio::net::TcpStream;
use tokio::task::JoinHandle;
use tokio::time::{timeout, Duration};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use xftodo::backend::server::{create_app, ServerConfig};
use xftodo::shared::{ClientEvent, ServerEvent};

pub type TestSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// How long to wait for a server event before failing
pub const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

/// A running server. Aborted on drop.
pub struct TestServer {
    pub addr: SocketAddr,
    pub static_dir: TempDir,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start with the in-memory store
    pub async fn start(broadcast_updates: bool) -> Self {
        Self::start_with(None, broadcast_updates).await
    }

    pub async fn start_with(database_url: Option<String>, broadcast_updates: bool) -> Self {
        let static_dir = tempfile::tempdir().expect("Failed to create static dir");
        std::fs::write(static_dir.path().join("index.html"), "<h1>xftodo</h1>")
            .expect("Failed to write index.html");

        let config = ServerConfig {
            port: 0,
            database_url,
            static_dir: static_dir.path().to_path_buf(),
            broadcast_updates,
        };
        let app = create_app(&config).await;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, static_dir, handle }
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    /// Open a socket to `/ws`
    pub async fn connect(&self) -> TestSocket {
        let (socket, _) = tokio_tungstenite::connect_async(self.ws_url())
            .await
            .expect("Failed to connect to test server");
        socket
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub async fn send(socket: &mut TestSocket, event: &ClientEvent) {
    let text = event.to_json().expect("Failed to encode client event");
    socket
        .send(Message::Text(text.into()))
        .await
        .expect("Failed to send frame");
}

pub async fn send_raw(socket: &mut TestSocket, text: &str) {
    socket
        .send(Message::Text(text.to_string().into()))
        .await
        .expect("Failed to send frame");
}

/// Next server event, skipping control frames
pub async fn recv(socket: &mut TestSocket) -> ServerEvent {
    loop {
        let frame = timeout(EVENT_TIMEOUT, socket.next())
            .await
            .expect("Timed out waiting for a server event")
            .expect("Socket closed")
            .expect("Socket error");
        if let Message::Text(text) = frame {
            return ServerEvent::from_json(text.as_str()).expect("Server sent an unreadable event");
        }
    }
}

/// Assert that nothing arrives within `wait`
pub async fn expect_silence(socket: &mut TestSocket, wait: Duration) {
    match timeout(wait, socket.next()).await {
        Err(_) => {}
        Ok(Some(Ok(Message::Text(text)))) => panic!("Unexpected event: {}", text),
        Ok(other) => panic!("Unexpected frame: {:?}", other),
    }
}
