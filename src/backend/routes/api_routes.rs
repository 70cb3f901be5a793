/**
 * API Route Handlers
 *
 * Plain HTTP endpoints next to the WebSocket channel.
 *
 * # Routes
 *
 * - `GET /health` - Liveness probe reporting the active store backend
 */

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::backend::server::state::AppState;
use crate::backend::store::TodoStore;

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: &'static str,
}

/// Handle `GET /health`
pub async fn health(State(store): State<TodoStore>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        store: store.backend_name(),
    })
}

/// Add the API routes to `router`
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/health", get(health))
}
