use axum::Json;
use serde_json::{json, Value};

/// Liveness probe. Never fails.
pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
