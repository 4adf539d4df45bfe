use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - process status plus the live subscriber count
pub async fn health_check(State(state): State<AppState>) -> Response {
    let (status, code) = if state.shutdown.is_shutdown() {
        ("shutting_down", StatusCode::SERVICE_UNAVAILABLE)
    } else {
        ("healthy", StatusCode::OK)
    };

    let health = json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "connections": state.registry.total_count().await,
        "max_connections": state.registry.limits().max_total,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (code, Json(health)).into_response()
}
