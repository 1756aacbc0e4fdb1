//! User profile model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Personal details attached one-to-one to a user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserProfile {
    pub id: i64,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub location: String,
    pub user_id: i64,
}

/// Create or replace profile request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProfileInput {
    #[serde(default)]
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub location: String,
}
