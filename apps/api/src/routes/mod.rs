pub mod export;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_body_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Export API
        .route("/api/v1/export/:format", post(export::handle_export))
        // Demo data
        .route("/api/v1/sample", get(export::handle_get_sample))
        .route(
            "/api/v1/sample/export/:format",
            get(export::handle_export_sample),
        )
        .layer(body_limit)
        .with_state(state)
}
