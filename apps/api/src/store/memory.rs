use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::AppError;
use crate::models::user::{RoleMember, UserRecord};
use crate::store::{recency_cutoff, RecencySide, UserFilter, UserStore};

/// In-memory `UserStore` for resolver tests. Rows are kept in id order.
pub struct MemoryUserStore {
    users: Vec<UserRecord>,
    unavailable: bool,
}

impl MemoryUserStore {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users,
            unavailable: false,
        }
    }

    /// A store whose every query fails as if the database were gone.
    pub fn unavailable() -> Self {
        Self {
            users: Vec::new(),
            unavailable: true,
        }
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unavailable {
            return Err(AppError::StoreUnavailable(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn all_users(&self) -> Result<Vec<UserRecord>, AppError> {
        self.check()?;
        Ok(self.users.clone())
    }

    async fn users_by_recency(
        &self,
        cutoff_days: i64,
        side: RecencySide,
        today: NaiveDate,
    ) -> Result<Vec<UserRecord>, AppError> {
        self.check()?;
        let cutoff = recency_cutoff(today, cutoff_days);
        Ok(self
            .users
            .iter()
            .filter(|u| side.contains(u.last_login, cutoff))
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.users.len() as i64)
    }

    async fn count_filtered(&self, filter: &UserFilter) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.users.iter().filter(|u| filter.matches(u)).count() as i64)
    }

    async fn users_by_role(&self, role: &str) -> Result<Vec<RoleMember>, AppError> {
        self.check()?;
        Ok(self
            .users
            .iter()
            .filter(|u| u.role == role)
            .map(RoleMember::from)
            .collect())
    }
}
