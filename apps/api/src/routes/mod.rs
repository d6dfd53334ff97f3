pub mod diagnostics;
pub mod health;
pub mod index;
pub mod status;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// Resumes are uploaded whole; same ceiling as a stock Streamlit upload widget.
pub const MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/status", get(status::status_handler))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        // Diagnostics
        .route("/api/v1/models", get(diagnostics::handle_list_models))
        .route("/api/v1/models/check", post(diagnostics::handle_check_model))
        .route(
            "/api/v1/webhook/test",
            post(diagnostics::handle_webhook_test),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
