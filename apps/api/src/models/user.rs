use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role string carried by administrators.
pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// `None` when the user never logged in.
    pub last_login: Option<NaiveDate>,
    pub role: String,
}

/// Role-listing projection of a user. Carries no `last_login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RoleMember {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<&UserRecord> for RoleMember {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub total_users: i64,
    pub inactive_users: i64,
}
