//! Axum router configuration with middleware.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Liveness body for `GET /`.
pub const HEALTH_TEXT: &str = "SessionPing Telegram bot is running";

/// Build the complete router: health check, Telegram webhook, notify
/// endpoint, plaintext 404 fallback.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/webhook", post(handlers::webhook::receive_update))
        .route("/notify", post(handlers::notify::notify))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - plaintext liveness string.
async fn health_check() -> &'static str {
    HEALTH_TEXT
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
