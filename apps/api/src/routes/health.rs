use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness message for anything probing the root.
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Hello from Server!" }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "jobtrack-api"
    }))
}
