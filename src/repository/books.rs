//! Book queries

use async_trait::async_trait;
use chrono::Utc;

use super::{BooksRepository, Repository};
use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

#[async_trait]
impl BooksRepository for Repository {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE title = $1")
            .bind(title)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_by_author(&self, author_id: i64) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE author_id = $1 ORDER BY id")
            .bind(author_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_by_category(&self, category_id: i64) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE category_id = $1 ORDER BY id")
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, isbn, available, author_id, category_id, borrower_id)
            VALUES ($1, $2, TRUE, $3, $4, NULL)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.isbn)
        .bind(data.author_id)
        .bind(data.category_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $1, isbn = $2, author_id = $3, category_id = $4, updated_at = $5
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.isbn)
        .bind(data.author_id)
        .bind(data.category_id)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn set_borrower(&self, id: i64, borrower_id: Option<i64>) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET borrower_id = $1, available = $2, updated_at = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(borrower_id)
        .bind(borrower_id.is_none())
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
