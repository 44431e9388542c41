pub mod audits;
pub mod extract;
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route(
            "/api/audits",
            post(audits::create_audit).get(audits::list_audits),
        )
        .route("/api/audits/{id}", get(audits::get_audit))
        .route(
            "/functions/v1/create-seo-audit",
            post(audits::create_audit),
        )
        .with_state(state)
}
