use axum::response::Json;
use serde_json::{Value, json};

/// Health probe of the local callback server. Reports the running state and
/// the application version so a hanging auth flow can be diagnosed.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "application": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
