use axum::Json;
use serde_json::{json, Value};

/// Root info route, used by the front-end as a connectivity check.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Backend du site des obsèques - Opérationnel",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Liveness probe. There is no database or queue to check; if the
/// process answers, it is healthy.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
