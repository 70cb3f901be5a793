/**
 * Application State Management
 *
 * This module defines the application state shared by every request
 * handler and socket connection.
 *
 * # Architecture
 *
 * The `AppState` struct holds:
 * - the todo store (in-memory or SQLite)
 * - the relay channel used for multi-client updates
 * - whether relaying is enabled
 *
 * # Thread Safety
 *
 * Every field is cheap to clone and safe to share: the stores wrap an
 * `Arc` or a connection pool, and `broadcast::Sender` is `Clone + Send + Sync`.
 */

use axum::extract::FromRef;

use crate::backend::realtime::broadcast::{self, TodoEventBroadcast};
use crate::backend::store::TodoStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// The single collection of todo records
    pub store: TodoStore,

    /// Relay channel for mutations made by other connections
    pub realtime_broadcast: TodoEventBroadcast,

    /// Whether mutation responses are relayed to every connection
    ///
    /// When `false`, responses only go back to the requesting connection.
    pub broadcast_updates: bool,
}

impl AppState {
    pub fn new(store: TodoStore, broadcast_updates: bool) -> Self {
        Self {
            store,
            realtime_broadcast: broadcast::channel(),
            broadcast_updates,
        }
    }
}

/// Implement FromRef for TodoStore
///
/// This allows plain HTTP handlers to extract the store with
/// `State(store): State<TodoStore>`.
impl FromRef<AppState> for TodoStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}
