//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Book record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    /// Unique title
    pub title: String,
    pub isbn: String,
    /// False while the book is borrowed
    pub available: bool,
    pub author_id: i64,
    pub category_id: i64,
    /// User currently borrowing the book
    pub borrower_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub isbn: String,
    pub author_id: i64,
    pub category_id: i64,
}

/// Query parameters for creating a book under an author
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateAuthorBookQuery {
    pub category_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub isbn: String,
}

impl CreateAuthorBookQuery {
    pub fn into_create_book(self, author_id: i64) -> CreateBook {
        CreateBook {
            title: self.title,
            isbn: self.isbn,
            author_id,
            category_id: self.category_id,
        }
    }
}

/// Update book request (full replacement of the editable fields)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub isbn: String,
    /// Must match the current lending state (false while borrowed)
    pub available: bool,
    pub author_id: i64,
    pub category_id: i64,
}
