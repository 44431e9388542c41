use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

use crate::AppState;

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let store_status = match state.store.ping().await {
        Ok(()) => "healthy",
        Err(e) => {
            tracing::warn!(error = %e, "Audit store health check failed");
            "unhealthy"
        }
    };

    let status = if store_status == "healthy" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if status == StatusCode::OK { "ok" } else { "error" },
            "store": state.store.backend(),
            "store_status": store_status,
            "service": "seo-audit-service",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
