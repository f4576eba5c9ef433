use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::auth::check_credentials;
use crate::errors::AppError;

/// Missing fields deserialize to `None` and fail the check like a wrong password.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub role: &'static str,
}

/// POST /login
pub async fn handle_login(Json(req): Json<LoginRequest>) -> Result<Json<LoginResponse>, AppError> {
    let username = req.username.as_deref().unwrap_or_default();
    let password = req.password.as_deref().unwrap_or_default();

    let role = check_credentials(username, password).map_err(|e| {
        warn!(username, "Rejected login");
        e
    })?;
    Ok(Json(LoginResponse { role }))
}
