//! Repository layer for database operations
//!
//! Each entity gets a persistence trait so services can be exercised without
//! PostgreSQL; [`Repository`] is the production implementation of all of them.

pub mod authors;
pub mod books;
pub mod categories;
pub mod profiles;
pub mod users;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        book::{CreateBook, UpdateBook},
        profile::ProfileInput,
        Author, Book, Category, User, UserProfile,
    },
};

/// Book persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BooksRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Book>>;
    async fn get_by_id(&self, id: i64) -> AppResult<Option<Book>>;
    async fn find_by_title(&self, title: &str) -> AppResult<Option<Book>>;
    async fn list_by_author(&self, author_id: i64) -> AppResult<Vec<Book>>;
    async fn list_by_category(&self, category_id: i64) -> AppResult<Vec<Book>>;
    /// Insert an available, unborrowed book
    async fn create(&self, data: &CreateBook) -> AppResult<Book>;
    /// Replace the editable fields; availability and borrower are left untouched
    async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<Option<Book>>;
    /// Set or clear the borrower; availability follows the borrower
    async fn set_borrower(&self, id: i64, borrower_id: Option<i64>) -> AppResult<Option<Book>>;
    /// Returns false when no row was deleted
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Author persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorsRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Author>>;
    async fn get_by_id(&self, id: i64) -> AppResult<Option<Author>>;
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Author>>;
    async fn create(&self, name: &str) -> AppResult<Author>;
    async fn update(&self, id: i64, name: &str) -> AppResult<Option<Author>>;
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Category persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoriesRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Category>>;
    async fn get_by_id(&self, id: i64) -> AppResult<Option<Category>>;
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Category>>;
    async fn create(&self, name: &str) -> AppResult<Category>;
    async fn update(&self, id: i64, name: &str) -> AppResult<Option<Category>>;
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// User account persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn get_by_id(&self, id: i64) -> AppResult<Option<User>>;
    /// Case-insensitive lookup
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn create(&self, email: &str, password_hash: &str) -> AppResult<User>;
}

/// User profile persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfilesRepository: Send + Sync {
    async fn get_by_user(&self, user_id: i64) -> AppResult<Option<UserProfile>>;
    /// Create the user's profile or replace the existing one
    async fn upsert(&self, user_id: i64, data: &ProfileInput) -> AppResult<UserProfile>;
}

/// Storage liveness probe
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn ping(&self) -> AppResult<()>;
}

/// PostgreSQL repository holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthCheck for Repository {
    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
