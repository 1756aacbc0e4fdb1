//! Data models for Bookshelf

pub mod author;
pub mod book;
pub mod category;
pub mod profile;
pub mod user;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Re-export commonly used types
pub use author::{Author, AuthorDetails};
pub use book::Book;
pub use category::{Category, CategoryDetails};
pub use profile::UserProfile;
pub use user::{User, UserClaims};

/// Plain status message for mutations that return no entity
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
