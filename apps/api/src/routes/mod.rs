pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::comparison::handlers;
use crate::errors::AppError;
use crate::state::AppState;

/// Headroom on top of the file limit for multipart boundaries and headers.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Comparison API
        .route("/api/v1/compare", post(handlers::handle_compare))
        .route("/api/v1/keywords", post(handlers::handle_keywords))
        .route("/api/v1/highlight", post(handlers::handle_highlight))
        // Text intake
        .route(
            "/api/v1/documents/extract",
            post(handlers::handle_extract_document).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .fallback(not_found)
        .with_state(state)
}
