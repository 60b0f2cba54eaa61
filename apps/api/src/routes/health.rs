use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
/// Returns a simple status object.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Interview Saathi backend running!"
    }))
}
