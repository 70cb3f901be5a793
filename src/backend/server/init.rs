/**
 * Server Initialization
 *
 * This module builds the Axum application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the todo store (SQLite when `DATABASE_URL` is set, memory otherwise)
 * 2. Create the application state and relay channel
 * 3. Create and configure the router
 *
 * # Error Handling
 *
 * Startup is resilient: a store that cannot be opened is logged and
 * replaced by the in-memory store, so the server always comes up.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::open_store;

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("[STARTUP] Initializing xftodo server");

    let store = open_store(config.database_url.as_deref()).await;
    tracing::info!("[STARTUP] Todo store ready ({})", store.backend_name());

    if config.broadcast_updates {
        tracing::info!("[STARTUP] Relaying todo updates to all connected clients");
    } else {
        tracing::info!("[STARTUP] Replying to the requesting client only");
    }

    let app_state = AppState::new(store, config.broadcast_updates);
    create_router(app_state, &config.static_dir)
}

/// Resolve when the process receives Ctrl-C
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::warn!("[Server] Shutdown signal received"),
        Err(e) => tracing::error!("[Server] Failed to listen for shutdown signal: {}", e),
    }
}
