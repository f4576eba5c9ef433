use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::intent::classifier::classify;
use crate::intent::resolver::{resolve, Resolution};
use crate::state::AppState;
use crate::store::SqliteUserStore;

#[derive(Deserialize)]
pub struct AiQuery {
    pub question: String,
}

/// POST /ai-query
pub async fn handle_ai_query(
    State(state): State<AppState>,
    Json(req): Json<AiQuery>,
) -> Result<Json<Resolution>, AppError> {
    let intent = classify(&req.question);
    debug!(?intent, question = %req.question, "Classified question");

    let store = SqliteUserStore::new(state.db.clone());
    let resolution = resolve(&store, intent, Utc::now().date_naive()).await?;
    Ok(Json(resolution))
}
