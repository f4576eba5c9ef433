//! Runs the store query behind an `Intent` and shapes the
//! `{inference, result}` payload returned to the caller.

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::AppError;
use crate::intent::classifier::Intent;
use crate::models::user::{RoleMember, UserRecord, UserSummary, ADMIN_ROLE};
use crate::store::{RecencySide, UserFilter, UserStore, INACTIVITY_DAYS};

pub const UNKNOWN_INFERENCE: &str = "Could not understand the question";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResultPayload {
    Users(Vec<UserRecord>),
    RoleMembers(Vec<RoleMember>),
    Count(i64),
    Summary(UserSummary),
}

impl ResultPayload {
    /// Serializes as `[]`.
    pub fn empty() -> Self {
        ResultPayload::Users(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub inference: String,
    pub result: ResultPayload,
}

impl Resolution {
    fn new(inference: &str, result: ResultPayload) -> Self {
        Self {
            inference: inference.to_string(),
            result,
        }
    }
}

/// Resolves `intent` against `store`. Recency is measured from `today`.
/// Unknown intents never touch the store.
pub async fn resolve(
    store: &dyn UserStore,
    intent: Intent,
    today: NaiveDate,
) -> Result<Resolution, AppError> {
    let resolution = match intent {
        Intent::AllUsers => {
            Resolution::new("All users", ResultPayload::Users(store.all_users().await?))
        }
        Intent::InactiveUsers => Resolution::new(
            "Inactive users (last 30 days)",
            ResultPayload::Users(
                store
                    .users_by_recency(INACTIVITY_DAYS, RecencySide::Before, today)
                    .await?,
            ),
        ),
        Intent::ActiveUsers => Resolution::new(
            "Recently active users",
            ResultPayload::Users(
                store
                    .users_by_recency(INACTIVITY_DAYS, RecencySide::OnOrAfter, today)
                    .await?,
            ),
        ),
        // AdminUserCount deliberately shares the plain total. Whether it should
        // count `role = admin` instead is an open product question.
        Intent::UserCount | Intent::AdminUserCount => {
            Resolution::new("Total users", ResultPayload::Count(store.count().await?))
        }
        Intent::AdminUsers => Resolution::new(
            "Admin users",
            ResultPayload::RoleMembers(store.users_by_role(ADMIN_ROLE).await?),
        ),
        Intent::UserSummary => Resolution::new(
            "User summary",
            ResultPayload::Summary(summarize(store, today).await?),
        ),
        Intent::Unknown => Resolution::new(UNKNOWN_INFERENCE, ResultPayload::empty()),
    };
    Ok(resolution)
}

/// Total and inactive counts as of `today`.
pub async fn summarize(store: &dyn UserStore, today: NaiveDate) -> Result<UserSummary, AppError> {
    Ok(UserSummary {
        total_users: store.count().await?,
        inactive_users: store.count_filtered(&UserFilter::inactive(today)).await?,
    })
}
