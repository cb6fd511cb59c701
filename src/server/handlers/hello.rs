use axum::response::Json;
use serde_json::{json, Value};

/// Placeholder endpoint with no business meaning. Always answers the same object.
pub async fn hello() -> Json<Value> {
    Json(json!({ "hey": "keu" }))
}
