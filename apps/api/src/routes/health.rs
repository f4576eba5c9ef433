use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness probe for the admin frontend.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "Backend is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
