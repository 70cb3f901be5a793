/**
 * WebSocket Client
 *
 * Keeps a connection to the server's `/ws` endpoint on a background thread so
 * the egui loop never blocks on the network.
 *
 * # Channels
 *
 * - outgoing: `ClientEvent`s queued by the UI, written in order
 * - incoming: `SocketSignal`s drained by the UI once per frame
 *
 * # Reconnection
 *
 * A lost or refused connection is reported as `Disconnected` and retried
 * every `RECONNECT_DELAY`. Every successful connect sends `load-todos` before
 * anything queued, so the mirror is rebuilt from the server's list.
 * Events queued while offline are sent after the reconnect.
 */

use std::sync::mpsc as std_mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

use futures_util::{Sink, SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, watch};
use tokio::time;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use crate::shared::{ClientEvent, ServerEvent, SharedError};

/// Delay between connection attempts
pub const RECONNECT_DELAY: Duration = Duration::from_secs(2);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Something the UI should know about
#[derive(Debug, Clone, PartialEq)]
pub enum SocketSignal {
    Connected,
    Disconnected(String),
    Event(ServerEvent),
}

/// Called after each signal so the UI can wake up and drain it
pub type Waker = Box<dyn Fn() + Send + 'static>;

/// Handle to the background connection. Dropping it closes the socket.
pub struct SocketClient {
    outgoing: mpsc::UnboundedSender<ClientEvent>,
    incoming: std_mpsc::Receiver<SocketSignal>,
    shutdown: watch::Sender<bool>,
    worker: Option<JoinHandle<()>>,
}

impl SocketClient {
    /// Start the background connection to `url`
    pub fn spawn(url: String, waker: Waker) -> Self {
        let (outgoing, outgoing_rx) = mpsc::unbounded_channel();
        let (incoming_tx, incoming) = std_mpsc::channel();
        let (shutdown, shutdown_rx) = watch::channel(false);

        let worker = std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime,
                Err(e) => {
                    tracing::error!("[Client] Failed to start socket runtime: {}", e);
                    let _ = incoming_tx.send(SocketSignal::Disconnected(e.to_string()));
                    waker();
                    return;
                }
            };
            let link = Link {
                url,
                outgoing: outgoing_rx,
                incoming: incoming_tx,
                shutdown: shutdown_rx,
                waker,
            };
            runtime.block_on(link.run());
        });

        Self {
            outgoing,
            incoming,
            shutdown,
            worker: Some(worker),
        }
    }

    /// Queue an event for the server
    pub fn send(&self, event: ClientEvent) -> Result<(), SharedError> {
        self.outgoing
            .send(event)
            .map_err(|e| SharedError::channel_closed(format!("socket worker stopped, dropped {}", e.0.name())))
    }

    /// Next pending signal, if any
    pub fn try_recv(&self) -> Option<SocketSignal> {
        self.incoming.try_recv().ok()
    }
}

impl Drop for SocketClient {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

enum ConnectionEnd {
    Shutdown,
    Lost(String),
}

/// State owned by the background thread
struct Link {
    url: String,
    outgoing: mpsc::UnboundedReceiver<ClientEvent>,
    incoming: std_mpsc::Sender<SocketSignal>,
    shutdown: watch::Receiver<bool>,
    waker: Waker,
}

impl Link {
    async fn run(mut self) {
        loop {
            if *self.shutdown.borrow() {
                break;
            }

            tracing::debug!("[Client] Connecting to {}", self.url);
            let attempt = tokio::select! {
                result = time::timeout(CONNECT_TIMEOUT, tokio_tungstenite::connect_async(self.url.as_str())) => result,
                _ = self.shutdown.changed() => break,
            };

            let reason = match attempt {
                Ok(Ok((stream, _))) => {
                    tracing::info!("[Client] Connected to {}", self.url);
                    if !self.notify(SocketSignal::Connected) {
                        break;
                    }
                    match self.serve(stream).await {
                        ConnectionEnd::Shutdown => break,
                        ConnectionEnd::Lost(reason) => reason,
                    }
                }
                Ok(Err(e)) => e.to_string(),
                Err(_) => format!("connect timed out after {}s", CONNECT_TIMEOUT.as_secs()),
            };

            tracing::warn!("[Client] Disconnected: {}, retrying in {}s", reason, RECONNECT_DELAY.as_secs());
            if !self.notify(SocketSignal::Disconnected(reason)) {
                break;
            }

            tokio::select! {
                _ = time::sleep(RECONNECT_DELAY) => {}
                _ = self.shutdown.changed() => break,
            }
        }
        tracing::debug!("[Client] Socket worker stopped");
    }

    async fn serve(&mut self, stream: WebSocketStream<MaybeTlsStream<TcpStream>>) -> ConnectionEnd {
        let (mut write, mut read) = stream.split();

        if let Err(reason) = send_event(&mut write, &ClientEvent::LoadTodos).await {
            return ConnectionEnd::Lost(reason);
        }

        loop {
            tokio::select! {
                _ = self.shutdown.changed() => {
                    let _ = write.send(Message::Close(None)).await;
                    return ConnectionEnd::Shutdown;
                }
                event = self.outgoing.recv() => {
                    let Some(event) = event else {
                        return ConnectionEnd::Shutdown;
                    };
                    if let Err(reason) = send_event(&mut write, &event).await {
                        return ConnectionEnd::Lost(reason);
                    }
                }
                frame = read.next() => match frame {
                    Some(Ok(Message::Text(text))) => match ServerEvent::from_json(text.as_str()) {
                        Ok(event) => {
                            if !self.notify(SocketSignal::Event(event)) {
                                return ConnectionEnd::Shutdown;
                            }
                        }
                        Err(e) => tracing::warn!("[Client] Ignoring unreadable frame: {}", e),
                    },
                    Some(Ok(Message::Close(_))) | None => {
                        return ConnectionEnd::Lost("closed by server".to_string());
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return ConnectionEnd::Lost(e.to_string()),
                },
            }
        }
    }

    /// Hand a signal to the UI. Returns `false` once the UI side is gone.
    fn notify(&self, signal: SocketSignal) -> bool {
        if self.incoming.send(signal).is_err() {
            return false;
        }
        (self.waker)();
        true
    }
}

async fn send_event<S>(write: &mut S, event: &ClientEvent) -> Result<(), String>
where
    S: Sink<Message> + Unpin,
    S::Error: std::fmt::Display,
{
    let text = event.to_json().map_err(|e| e.to_string())?;
    tracing::debug!("[Client] Sending {}", event.name());
    write.send(Message::Text(text.into())).await.map_err(|e| e.to_string())
}
