use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    messages: usize,
}

/// Health check endpoint
///
/// Reports process liveness and the current number of stored messages.
/// The store is purely in-memory, so the count resets on restart.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let messages = state.store.len().await;

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            messages,
        }),
    )
}
