use sqlx::PgPool;

/// Shared application state injected into all route handlers via Axum extractors.
/// Handlers keep no mutable state of their own; the pool is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
}
