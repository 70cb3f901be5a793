/**
 * Todo Event Relay
 *
 * This module provides the broadcast channel used to relay todo mutations
 * from one connection to every other open connection when multi-client
 * updates are enabled.
 *
 * # Broadcasting
 *
 * Events are broadcast using `tokio::sync::broadcast`. Each relayed event
 * carries the id of the connection that caused it, so that connection can
 * skip its own copy; it already received the direct response.
 */

use crate::shared::ServerEvent;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Capacity of the relay channel
pub const RELAY_CAPACITY: usize = 1000;

/// A mutation relayed to other connections
#[derive(Debug, Clone)]
pub struct RelayedEvent {
    /// Connection whose request produced the event
    pub origin: Uuid,
    /// The response event
    pub event: ServerEvent,
}

/// Sender side of the relay channel
pub type TodoEventBroadcast = broadcast::Sender<RelayedEvent>;

/// Create a relay channel with no subscribers yet
pub fn channel() -> TodoEventBroadcast {
    broadcast::channel(RELAY_CAPACITY).0
}

/// Relay an event to all subscribers
///
/// # Returns
///
/// Number of active subscribers that received the event (0 if no subscribers)
pub fn broadcast_event(broadcast_tx: &TodoEventBroadcast, origin: Uuid, event: ServerEvent) -> usize {
    let name = event.name();
    match broadcast_tx.send(RelayedEvent { origin, event }) {
        Ok(subscriber_count) => {
            tracing::debug!("[Realtime] {} relayed to {} subscribers", name, subscriber_count);
            subscriber_count
        }
        Err(e) => {
            // No subscribers, that's okay
            tracing::debug!("[Realtime] No subscribers to receive event: {:?}", e.0.event.name());
            0
        }
    }
}
