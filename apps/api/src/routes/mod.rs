pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio API
        .route(
            "/api/portfolio/job-roles",
            get(handlers::handle_list_job_roles),
        )
        .route(
            "/api/portfolio/job-roles/:id",
            get(handlers::handle_get_job_role),
        )
        .route("/api/portfolio/analyze", post(handlers::handle_analyze))
        .route(
            "/api/portfolio/generate",
            post(handlers::handle_generate_portfolio),
        )
        .with_state(state)
}
