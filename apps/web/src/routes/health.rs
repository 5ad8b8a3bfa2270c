//! Health check endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::warn;

use crate::state::AppState;

/// `OK` while the database answers, 503 otherwise.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    if state.db.health_check().await {
        (StatusCode::OK, "OK")
    } else {
        warn!("Health check failed: database unavailable");
        (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
    }
}
