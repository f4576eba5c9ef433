use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::errors::AppError;
use crate::intent::resolver::summarize;
use crate::models::user::{UserRecord, UserSummary, ADMIN_ROLE};
use crate::state::AppState;
use crate::store::{SqliteUserStore, UserFilter, UserStore};
use crate::users::export::{users_to_csv, EXPORT_FILENAME};

#[derive(Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub summary: UserSummary,
    pub admin_users: i64,
}

/// GET /users
pub async fn handle_list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserRecord>>, AppError> {
    let store = SqliteUserStore::new(state.db.clone());
    Ok(Json(store.all_users().await?))
}

/// GET /stats
pub async fn handle_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let store = SqliteUserStore::new(state.db.clone());
    let summary = summarize(&store, Utc::now().date_naive()).await?;
    let admin_users = store
        .count_filtered(&UserFilter::Role(ADMIN_ROLE.to_string()))
        .await?;
    Ok(Json(StatsResponse {
        summary,
        admin_users,
    }))
}

/// GET /export-users
pub async fn handle_export_users(State(state): State<AppState>) -> Result<Response, AppError> {
    let store = SqliteUserStore::new(state.db.clone());
    let csv = users_to_csv(&store.all_users().await?);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        csv,
    )
        .into_response())
}
