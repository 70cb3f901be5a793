/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. `GET /ws` - WebSocket channel for todo events
 * 2. API routes (`GET /health`)
 * 3. Static files from the configured directory, falling back to
 *    `index.html` for unknown paths so a single-page frontend can route
 *    client-side
 */

use axum::{routing::get, Router};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::backend::realtime::socket::handle_socket_upgrade;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, static_dir: &Path) -> Router<()> {
    let router = Router::new().route("/ws", get(handle_socket_upgrade));

    let router = configure_api_routes(router);

    let index = static_dir.join("index.html");
    let router = router.fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)));

    router.with_state(app_state)
}
