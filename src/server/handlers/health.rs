use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};
use tracing::warn;

use crate::server::app::AppState;

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let (status, code) = match state.db.ping().await {
        Ok(()) => ("healthy", StatusCode::OK),
        Err(e) => {
            warn!("Health check failed to reach database: {}", e);
            ("unhealthy", StatusCode::SERVICE_UNAVAILABLE)
        }
    };

    (
        code,
        Json(json!({
            "status": status,
            "service": "cookbook",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
