//! Record Store: read-only access to the `users` table.
//!
//! Handlers build a store per request and hand it to the resolver as
//! `&dyn UserStore`; nothing here is a process-wide singleton.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};

use crate::errors::AppError;
use crate::models::user::{RoleMember, UserRecord};

pub mod sqlite;

#[cfg(test)]
pub mod memory;

pub use sqlite::SqliteUserStore;

/// Users whose last login is older than this many days are inactive.
pub const INACTIVITY_DAYS: i64 = 30;

/// Which side of a recency cutoff to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecencySide {
    /// `last_login < cutoff`, plus users who never logged in.
    Before,
    /// `last_login >= cutoff`.
    OnOrAfter,
}

/// Predicate for `UserStore::count_filtered`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserFilter {
    Recency { cutoff: NaiveDate, side: RecencySide },
    Role(String),
}

impl UserFilter {
    pub fn inactive(today: NaiveDate) -> Self {
        UserFilter::Recency {
            cutoff: recency_cutoff(today, INACTIVITY_DAYS),
            side: RecencySide::Before,
        }
    }
}

impl RecencySide {
    /// SQL predicate with one `?` placeholder for the cutoff date.
    pub fn sql_clause(self) -> &'static str {
        match self {
            RecencySide::Before => "(date(last_login) IS NULL OR date(last_login) < ?)",
            RecencySide::OnOrAfter => "date(last_login) >= ?",
        }
    }
}

// In-process evaluation of the predicates `sql_clause` pushes into SQLite.
#[cfg(test)]
impl UserFilter {
    pub fn matches(&self, user: &UserRecord) -> bool {
        match self {
            UserFilter::Recency { cutoff, side } => side.contains(user.last_login, *cutoff),
            UserFilter::Role(role) => user.role == *role,
        }
    }
}

#[cfg(test)]
impl RecencySide {
    /// The two sides are complements: every `last_login` lands on exactly one.
    pub fn contains(self, last_login: Option<NaiveDate>, cutoff: NaiveDate) -> bool {
        match (self, last_login) {
            (RecencySide::Before, None) => true,
            (RecencySide::OnOrAfter, None) => false,
            (RecencySide::Before, Some(d)) => d < cutoff,
            (RecencySide::OnOrAfter, Some(d)) => d >= cutoff,
        }
    }
}

/// `today - days`, the first date that still counts as recent.
pub fn recency_cutoff(today: NaiveDate, days: i64) -> NaiveDate {
    today - Duration::days(days)
}

/// Read queries over the user table. Implementations must be side-effect free.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every user, ordered by primary key.
    async fn all_users(&self) -> Result<Vec<UserRecord>, AppError>;

    /// Users on one side of `today - cutoff_days`, ordered by primary key.
    async fn users_by_recency(
        &self,
        cutoff_days: i64,
        side: RecencySide,
        today: NaiveDate,
    ) -> Result<Vec<UserRecord>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;

    async fn count_filtered(&self, filter: &UserFilter) -> Result<i64, AppError>;

    async fn users_by_role(&self, role: &str) -> Result<Vec<RoleMember>, AppError>;
}
