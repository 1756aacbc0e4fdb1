//! Category model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::book::Book;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i64,
    /// Unique name
    pub name: String,
}

/// Category with the books filed under it
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryDetails {
    pub id: i64,
    pub name: String,
    pub books: Vec<Book>,
}

impl CategoryDetails {
    pub fn new(category: Category, books: Vec<Book>) -> Self {
        Self {
            id: category.id,
            name: category.name,
            books,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CategoryInput {
    #[serde(default)]
    pub name: String,
}
