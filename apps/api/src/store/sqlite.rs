use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::user::{RoleMember, UserRecord};
use crate::store::{recency_cutoff, RecencySide, UserFilter, UserStore};

// `date()` normalizes timestamps to `YYYY-MM-DD` and turns unparseable values into NULL.
const SELECT_USERS: &str =
    "SELECT id, name, email, date(last_login) AS last_login, role FROM users";

/// SQLite-backed `UserStore`. Each query checks a connection out of the pool
/// and returns it when the query completes.
#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn all_users(&self) -> Result<Vec<UserRecord>, AppError> {
        Ok(
            sqlx::query_as::<_, UserRecord>(&format!("{SELECT_USERS} ORDER BY id"))
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn users_by_recency(
        &self,
        cutoff_days: i64,
        side: RecencySide,
        today: NaiveDate,
    ) -> Result<Vec<UserRecord>, AppError> {
        let cutoff = recency_cutoff(today, cutoff_days);
        let sql = format!("{SELECT_USERS} WHERE {} ORDER BY id", side.sql_clause());
        Ok(sqlx::query_as::<_, UserRecord>(&sql)
            .bind(cutoff)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?)
    }

    async fn count_filtered(&self, filter: &UserFilter) -> Result<i64, AppError> {
        let count = match filter {
            UserFilter::Recency { cutoff, side } => {
                let sql = format!("SELECT COUNT(*) FROM users WHERE {}", side.sql_clause());
                sqlx::query_scalar::<_, i64>(&sql)
                    .bind(*cutoff)
                    .fetch_one(&self.pool)
                    .await?
            }
            UserFilter::Role(role) => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE role = ?")
                    .bind(role)
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(count)
    }

    async fn users_by_role(&self, role: &str) -> Result<Vec<RoleMember>, AppError> {
        Ok(sqlx::query_as::<_, RoleMember>(
            "SELECT id, name, email, role FROM users WHERE role = ? ORDER BY id",
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await?)
    }
}

/// Inserts a user row. Only fixtures create users; the service never writes.
#[cfg(test)]
pub async fn insert_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    last_login: Option<NaiveDate>,
    role: &str,
) -> i64 {
    sqlx::query("INSERT INTO users (name, email, last_login, role) VALUES (?, ?, ?, ?)")
        .bind(name)
        .bind(email)
        .bind(last_login)
        .bind(role)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}
