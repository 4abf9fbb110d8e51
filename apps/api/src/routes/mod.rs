pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS API
        .route("/api/v1/ats/analyze", post(handlers::handle_analyze))
        .route(
            "/api/v1/ats/analyze/structured",
            post(handlers::handle_analyze_structured),
        )
        .route(
            "/api/v1/ats/analyze/batch",
            post(handlers::handle_analyze_batch),
        )
        .with_state(state)
}
