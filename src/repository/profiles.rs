//! User profile queries

use async_trait::async_trait;

use super::{ProfilesRepository, Repository};
use crate::{
    error::AppResult,
    models::profile::{ProfileInput, UserProfile},
};

#[async_trait]
impl ProfilesRepository for Repository {
    async fn get_by_user(&self, user_id: i64) -> AppResult<Option<UserProfile>> {
        let row = sqlx::query_as::<_, UserProfile>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn upsert(&self, user_id: i64, data: &ProfileInput) -> AppResult<UserProfile> {
        let row = sqlx::query_as::<_, UserProfile>(
            r#"
            INSERT INTO profiles (full_name, date_of_birth, location, user_id)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE
            SET full_name = EXCLUDED.full_name,
                date_of_birth = EXCLUDED.date_of_birth,
                location = EXCLUDED.location
            RETURNING *
            "#,
        )
        .bind(&data.full_name)
        .bind(data.date_of_birth)
        .bind(&data.location)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
