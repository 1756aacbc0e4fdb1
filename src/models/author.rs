//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::book::Book;

/// Author record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

/// Author with the books they wrote
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorDetails {
    pub id: i64,
    pub name: String,
    pub books: Vec<Book>,
}

impl AuthorDetails {
    pub fn new(author: Author, books: Vec<Book>) -> Self {
        Self {
            id: author.id,
            name: author.name,
            books,
        }
    }
}

/// Create / update author request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AuthorInput {
    #[serde(default)]
    pub name: String,
}
