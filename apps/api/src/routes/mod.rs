pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::jobs::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Job API, verb-style paths
        .route("/api/jobs/getjobs", get(handlers::handle_list))
        .route("/api/jobs/createjob", post(handlers::handle_create))
        .route("/api/jobs/updatejob/:id", put(handlers::handle_update))
        .route("/api/jobs/deletejob/:id", delete(handlers::handle_delete))
        // Same operations, resource-style paths
        .route(
            "/api/jobs",
            get(handlers::handle_list).post(handlers::handle_create),
        )
        .route(
            "/api/jobs/:id",
            put(handlers::handle_update).delete(handlers::handle_delete),
        )
        .with_state(state)
}
