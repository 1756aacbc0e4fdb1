//! In-memory repository for tests and router exercises without PostgreSQL.
//!
//! Mirrors the schema constraints that the services rely on: unique book
//! titles, unique category names, case-insensitive unique emails and one
//! profile per user.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::{
    AuthorsRepository, BooksRepository, CategoriesRepository, HealthCheck, ProfilesRepository,
    UsersRepository,
};
use crate::{
    error::{AppError, AppResult},
    models::{
        book::{CreateBook, UpdateBook},
        profile::ProfileInput,
        Author, Book, Category, User, UserProfile,
    },
};

#[derive(Default)]
struct Tables {
    next_id: i64,
    books: Vec<Book>,
    authors: Vec<Author>,
    categories: Vec<Category>,
    users: Vec<User>,
    profiles: Vec<UserProfile>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct MemoryRepository {
    tables: Mutex<Tables>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn with<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> T {
        let mut tables = self.tables.lock().unwrap();
        f(&mut tables)
    }
}

#[async_trait]
impl BooksRepository for MemoryRepository {
    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.with(|t| t.books.clone()))
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        Ok(self.with(|t| t.books.iter().find(|b| b.id == id).cloned()))
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Book>> {
        Ok(self.with(|t| t.books.iter().find(|b| b.title == title).cloned()))
    }

    async fn list_by_author(&self, author_id: i64) -> AppResult<Vec<Book>> {
        Ok(self.with(|t| t.books.iter().filter(|b| b.author_id == author_id).cloned().collect()))
    }

    async fn list_by_category(&self, category_id: i64) -> AppResult<Vec<Book>> {
        Ok(self.with(|t| {
            t.books
                .iter()
                .filter(|b| b.category_id == category_id)
                .cloned()
                .collect()
        }))
    }

    async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        self.with(|t| {
            if t.books.iter().any(|b| b.title == data.title) {
                return Err(AppError::Conflict("books_title_key".into()));
            }
            let now = Utc::now();
            let book = Book {
                id: t.next_id(),
                title: data.title.clone(),
                isbn: data.isbn.clone(),
                available: true,
                author_id: data.author_id,
                category_id: data.category_id,
                borrower_id: None,
                created_at: now,
                updated_at: now,
            };
            t.books.push(book.clone());
            Ok(book)
        })
    }

    async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<Option<Book>> {
        self.with(|t| {
            if t.books.iter().any(|b| b.title == data.title && b.id != id) {
                return Err(AppError::Conflict("books_title_key".into()));
            }
            Ok(t.books.iter_mut().find(|b| b.id == id).map(|book| {
                book.title = data.title.clone();
                book.isbn = data.isbn.clone();
                book.author_id = data.author_id;
                book.category_id = data.category_id;
                book.updated_at = Utc::now();
                book.clone()
            }))
        })
    }

    async fn set_borrower(&self, id: i64, borrower_id: Option<i64>) -> AppResult<Option<Book>> {
        Ok(self.with(|t| {
            t.books.iter_mut().find(|b| b.id == id).map(|book| {
                book.borrower_id = borrower_id;
                book.available = borrower_id.is_none();
                book.updated_at = Utc::now();
                book.clone()
            })
        }))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.with(|t| {
            let before = t.books.len();
            t.books.retain(|b| b.id != id);
            t.books.len() != before
        }))
    }
}

#[async_trait]
impl AuthorsRepository for MemoryRepository {
    async fn list(&self) -> AppResult<Vec<Author>> {
        Ok(self.with(|t| t.authors.clone()))
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Author>> {
        Ok(self.with(|t| t.authors.iter().find(|a| a.id == id).cloned()))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Author>> {
        Ok(self.with(|t| t.authors.iter().find(|a| a.name == name).cloned()))
    }

    async fn create(&self, name: &str) -> AppResult<Author> {
        Ok(self.with(|t| {
            let author = Author {
                id: t.next_id(),
                name: name.to_string(),
            };
            t.authors.push(author.clone());
            author
        }))
    }

    async fn update(&self, id: i64, name: &str) -> AppResult<Option<Author>> {
        Ok(self.with(|t| {
            t.authors.iter_mut().find(|a| a.id == id).map(|author| {
                author.name = name.to_string();
                author.clone()
            })
        }))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        self.with(|t| {
            if t.books.iter().any(|b| b.author_id == id) {
                return Err(AppError::Conflict("books_author_id_fkey".into()));
            }
            let before = t.authors.len();
            t.authors.retain(|a| a.id != id);
            Ok(t.authors.len() != before)
        })
    }
}

#[async_trait]
impl CategoriesRepository for MemoryRepository {
    async fn list(&self) -> AppResult<Vec<Category>> {
        Ok(self.with(|t| t.categories.clone()))
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        Ok(self.with(|t| t.categories.iter().find(|c| c.id == id).cloned()))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        Ok(self.with(|t| t.categories.iter().find(|c| c.name == name).cloned()))
    }

    async fn create(&self, name: &str) -> AppResult<Category> {
        self.with(|t| {
            if t.categories.iter().any(|c| c.name == name) {
                return Err(AppError::Conflict("categories_name_key".into()));
            }
            let category = Category {
                id: t.next_id(),
                name: name.to_string(),
            };
            t.categories.push(category.clone());
            Ok(category)
        })
    }

    async fn update(&self, id: i64, name: &str) -> AppResult<Option<Category>> {
        self.with(|t| {
            if t.categories.iter().any(|c| c.name == name && c.id != id) {
                return Err(AppError::Conflict("categories_name_key".into()));
            }
            Ok(t.categories.iter_mut().find(|c| c.id == id).map(|category| {
                category.name = name.to_string();
                category.clone()
            }))
        })
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        self.with(|t| {
            if t.books.iter().any(|b| b.category_id == id) {
                return Err(AppError::Conflict("books_category_id_fkey".into()));
            }
            let before = t.categories.len();
            t.categories.retain(|c| c.id != id);
            Ok(t.categories.len() != before)
        })
    }
}

#[async_trait]
impl UsersRepository for MemoryRepository {
    async fn get_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.with(|t| t.users.iter().find(|u| u.id == id).cloned()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.with(|t| {
            t.users
                .iter()
                .find(|u| u.email_address.eq_ignore_ascii_case(email))
                .cloned()
        }))
    }

    async fn create(&self, email: &str, password_hash: &str) -> AppResult<User> {
        self.with(|t| {
            if t.users.iter().any(|u| u.email_address.eq_ignore_ascii_case(email)) {
                return Err(AppError::Conflict("users_email_address_key".into()));
            }
            let user = User {
                id: t.next_id(),
                email_address: email.to_string(),
                password: password_hash.to_string(),
                created_at: Utc::now(),
            };
            t.users.push(user.clone());
            Ok(user)
        })
    }
}

#[async_trait]
impl ProfilesRepository for MemoryRepository {
    async fn get_by_user(&self, user_id: i64) -> AppResult<Option<UserProfile>> {
        Ok(self.with(|t| t.profiles.iter().find(|p| p.user_id == user_id).cloned()))
    }

    async fn upsert(&self, user_id: i64, data: &ProfileInput) -> AppResult<UserProfile> {
        Ok(self.with(|t| {
            if let Some(profile) = t.profiles.iter_mut().find(|p| p.user_id == user_id) {
                profile.full_name = data.full_name.clone();
                profile.date_of_birth = data.date_of_birth;
                profile.location = data.location.clone();
                return profile.clone();
            }
            let profile = UserProfile {
                id: t.next_id(),
                full_name: data.full_name.clone(),
                date_of_birth: data.date_of_birth,
                location: data.location.clone(),
                user_id,
            };
            t.profiles.push(profile.clone());
            profile
        }))
    }
}

#[async_trait]
impl HealthCheck for MemoryRepository {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
