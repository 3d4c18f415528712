pub mod health;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Multipart upload: resume + jobDescription
        .route("/upload", post(upload::handle_upload))
        // Matching API
        .route("/api/v1/keywords", post(handlers::handle_extract_keywords))
        .route("/api/v1/compare", post(handlers::handle_compare_keywords))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
