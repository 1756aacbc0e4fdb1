//! Author queries

use async_trait::async_trait;

use super::{AuthorsRepository, Repository};
use crate::{error::AppResult, models::Author};

#[async_trait]
impl AuthorsRepository for Repository {
    async fn list(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>("SELECT * FROM authors ORDER BY name, id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Author>> {
        let row = sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Author>> {
        // Names are not unique at the schema level; the oldest match wins
        let row = sqlx::query_as::<_, Author>(
            "SELECT * FROM authors WHERE name = $1 ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create(&self, name: &str) -> AppResult<Author> {
        let row = sqlx::query_as::<_, Author>("INSERT INTO authors (name) VALUES ($1) RETURNING *")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, name: &str) -> AppResult<Option<Author>> {
        let row = sqlx::query_as::<_, Author>(
            "UPDATE authors SET name = $1 WHERE id = $2 RETURNING *",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
