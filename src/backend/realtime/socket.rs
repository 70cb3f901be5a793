/**
 * WebSocket Handler
 *
 * This module implements the `/ws` endpoint. Each connection gets its own
 * task that reads client events in arrival order, dispatches them to the
 * todo handlers and writes the responses back.
 *
 * # Connection Layout
 *
 * - reader loop (this task) - parses frames and dispatches events
 * - writer task - owns the socket sink and serializes outgoing events
 * - relay task (optional) - forwards mutations made by other connections
 *
 * The reader and relay both push into one unbounded channel drained by the
 * writer, so the socket sink has a single owner.
 *
 * # Failures
 *
 * Malformed frames and handler errors are logged and dropped. Nothing is
 * sent to the client in either case.
 */

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use chrono::Utc;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::realtime::broadcast::{broadcast_event, RelayedEvent};
use crate::backend::server::state::AppState;
use crate::backend::store::TodoStore;
use crate::backend::todos::dispatch;
use crate::shared::{ClientEvent, ServerEvent, TimerStarted, TimerStopped};

/// Handle the WebSocket upgrade (GET /ws)
pub async fn handle_socket_upgrade(
    State(app_state): State<AppState>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, app_state))
}

/// Serve one connection until the client goes away
pub async fn handle_socket(socket: WebSocket, app_state: AppState) {
    let conn_id = Uuid::new_v4();
    tracing::info!("[Socket] Client connected: {}", conn_id);

    let (mut ws_tx, mut ws_rx) = socket.split();
    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<ServerEvent>();

    let writer = tokio::spawn(async move {
        while let Some(event) = out_rx.recv().await {
            let text = match event.to_json() {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!("[Socket] Failed to encode {}: {}", event.name(), e);
                    continue;
                }
            };
            if let Err(e) = ws_tx.send(Message::Text(text.into())).await {
                tracing::debug!("[Socket] Write to {} failed: {}", conn_id, e);
                break;
            }
        }
    });

    let relay = app_state.broadcast_updates.then(|| {
        spawn_relay(conn_id, app_state.realtime_broadcast.subscribe(), out_tx.clone())
    });

    while let Some(frame) = ws_rx.next().await {
        match frame {
            Ok(Message::Text(text)) => match process_frame(&app_state, conn_id, text.as_str()).await {
                Ok(Some(reply)) => {
                    if out_tx.send(reply).is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) if e.is_store_failure() => {
                    tracing::error!("[Socket] Dropped request from {}: {}", conn_id, e);
                }
                Err(e) => {
                    tracing::warn!("[Socket] Ignoring frame from {}: {}", conn_id, e);
                }
            },
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("[Socket] Read from {} failed: {}", conn_id, e);
                break;
            }
        }
    }

    if let Some(relay) = relay {
        relay.abort();
    }
    drop(out_tx);
    let _ = writer.await;

    tracing::info!("[Socket] Client disconnected: {}", conn_id);
}

/// Decode one text frame, run its handler and relay the result if enabled
pub async fn process_frame(
    app_state: &AppState,
    conn_id: Uuid,
    text: &str,
) -> Result<Option<ServerEvent>, BackendError> {
    let event = ClientEvent::from_json(text)?;
    tracing::debug!("[Socket] {} from {}", event.name(), conn_id);

    let reply = dispatch(&app_state.store, event, Utc::now()).await?;

    if let Some(reply) = &reply {
        if app_state.broadcast_updates && reply.is_mutation() {
            match relayed_form(&app_state.store, reply).await {
                Ok(event) => {
                    broadcast_event(&app_state.realtime_broadcast, conn_id, event);
                }
                Err(e) => tracing::error!("[Realtime] Not relaying {}: {}", reply.name(), e),
            }
        }
    }

    Ok(reply)
}

/// What other connections receive for `reply`.
///
/// Timer replies only carry what the sender already knows, so the relay sends
/// the stored record as `todo-updated` instead.
async fn relayed_form(store: &TodoStore, reply: &ServerEvent) -> Result<ServerEvent, BackendError> {
    let id = match reply {
        ServerEvent::TimerStarted(TimerStarted { id, .. }) | ServerEvent::TimerStopped(TimerStopped { id, .. }) => id,
        other => return Ok(other.clone()),
    };
    Ok(match store.find(id).await? {
        Some(todo) => ServerEvent::TodoUpdated(todo),
        None => reply.clone(),
    })
}

fn spawn_relay(
    conn_id: Uuid,
    mut rx: broadcast::Receiver<RelayedEvent>,
    out_tx: mpsc::UnboundedSender<ServerEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(relayed) => {
                    if relayed.origin == conn_id {
                        continue;
                    }
                    if out_tx.send(relayed.event).is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("[Realtime] Connection {} lagged, skipped {} events", conn_id, skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}
