pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/keywords", post(handlers::handle_extract_keywords))
        .route("/api/v1/scan", post(handlers::handle_scan_upload))
        .route("/api/v1/scan/text", post(handlers::handle_scan_text))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
