use sqlx::SqlitePool;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; handlers wrap `db` in a fresh `SqliteUserStore`.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}
