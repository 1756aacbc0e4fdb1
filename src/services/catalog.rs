//! Catalog management service: books, authors and categories

use std::sync::Arc;

use super::require_non_blank;
use crate::{
    error::{AppError, AppResult},
    models::{
        book::{CreateBook, UpdateBook},
        Author, AuthorDetails, Book, Category, CategoryDetails,
    },
    repository::{AuthorsRepository, BooksRepository, CategoriesRepository},
};

#[derive(Clone)]
pub struct CatalogService {
    books: Arc<dyn BooksRepository>,
    authors: Arc<dyn AuthorsRepository>,
    categories: Arc<dyn CategoriesRepository>,
}

impl CatalogService {
    pub fn new(
        books: Arc<dyn BooksRepository>,
        authors: Arc<dyn AuthorsRepository>,
        categories: Arc<dyn CategoriesRepository>,
    ) -> Self {
        Self {
            books,
            authors,
            categories,
        }
    }

    // Books

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.books.list().await
    }

    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.books
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Create a book. The title check runs before the author/category
    /// lookups, so a duplicate title is rejected whatever the other fields are.
    pub async fn create_book(&self, data: &CreateBook) -> AppResult<Book> {
        let title = require_non_blank("Title", &data.title)?;

        if self.books.find_by_title(title).await?.is_some() {
            tracing::debug!(title = %title, "Rejected duplicate book title");
            return Err(AppError::Conflict(
                "Book with the same title already exists".to_string(),
            ));
        }

        self.require_author(data.author_id).await?;
        self.require_category(data.category_id).await?;

        let data = CreateBook {
            title: title.to_string(),
            ..data.clone()
        };
        let book = self.books.create(&data).await?;
        tracing::info!(book_id = book.id, title = %book.title, "Book created");
        Ok(book)
    }

    /// Replace the editable fields of a book. `available` must agree with the
    /// current borrower; lending state only changes through borrow/return.
    pub async fn update_book(&self, id: i64, data: &UpdateBook) -> AppResult<Book> {
        let current = self.get_book(id).await?;
        let title = require_non_blank("Title", &data.title)?;

        if let Some(existing) = self.books.find_by_title(title).await? {
            if existing.id != id {
                return Err(AppError::Conflict(
                    "Book with the same title already exists".to_string(),
                ));
            }
        }

        if data.available != current.borrower_id.is_none() {
            return Err(AppError::Conflict(format!(
                "Availability of book {} is set by borrowing and returning it",
                id
            )));
        }

        self.require_author(data.author_id).await?;
        self.require_category(data.category_id).await?;

        let data = UpdateBook {
            title: title.to_string(),
            ..data.clone()
        };
        let book = self
            .books
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
        tracing::info!(book_id = id, "Book updated");
        Ok(book)
    }

    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        if !self.books.delete(id).await? {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }

    /// Lend an available book to a user
    pub async fn borrow_book(&self, id: i64, user_id: i64) -> AppResult<Book> {
        let book = self.get_book(id).await?;
        if !book.available || book.borrower_id.is_some() {
            return Err(AppError::Conflict(format!("Book {} is not available", id)));
        }

        let book = self
            .books
            .set_borrower(id, Some(user_id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
        tracing::info!(book_id = id, user_id, "Book borrowed");
        Ok(book)
    }

    /// Give a book back; only the current borrower may return it
    pub async fn return_book(&self, id: i64, user_id: i64) -> AppResult<Book> {
        let book = self.get_book(id).await?;
        match book.borrower_id {
            None => {
                return Err(AppError::Conflict(format!("Book {} is not borrowed", id)));
            }
            Some(borrower) if borrower != user_id => {
                return Err(AppError::Authorization(
                    "Book is borrowed by another user".to_string(),
                ));
            }
            Some(_) => {}
        }

        let book = self
            .books
            .set_borrower(id, None)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
        tracing::info!(book_id = id, user_id, "Book returned");
        Ok(book)
    }

    // Authors

    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.authors.list().await
    }

    pub async fn get_author(&self, id: i64) -> AppResult<AuthorDetails> {
        let author = self.require_author(id).await?;
        let books = self.books.list_by_author(id).await?;
        Ok(AuthorDetails::new(author, books))
    }

    /// Create an author, or return the existing one with the same name.
    /// The flag is true when a new author was inserted.
    pub async fn create_author(&self, name: &str) -> AppResult<(Author, bool)> {
        let name = require_non_blank("Author name", name)?;

        if let Some(existing) = self.authors.find_by_name(name).await? {
            return Ok((existing, false));
        }

        let author = self.authors.create(name).await?;
        tracing::info!(author_id = author.id, author_name = %author.name, "Author created");
        Ok((author, true))
    }

    pub async fn update_author(&self, id: i64, name: &str) -> AppResult<Author> {
        let name = require_non_blank("Author name", name)?;
        self.authors
            .update(id, name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    pub async fn delete_author(&self, id: i64) -> AppResult<()> {
        self.require_author(id).await?;
        if !self.books.list_by_author(id).await?.is_empty() {
            return Err(AppError::Conflict(format!("Author {} still has books", id)));
        }
        if !self.authors.delete(id).await? {
            return Err(AppError::NotFound(format!("Author {} not found", id)));
        }
        tracing::info!(author_id = id, "Author deleted");
        Ok(())
    }

    // Categories

    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.categories.list().await
    }

    pub async fn get_category(&self, id: i64) -> AppResult<CategoryDetails> {
        let category = self.require_category(id).await?;
        let books = self.books.list_by_category(id).await?;
        Ok(CategoryDetails::new(category, books))
    }

    pub async fn create_category(&self, name: &str) -> AppResult<Category> {
        let name = require_non_blank("Category name", name)?;

        if self.categories.find_by_name(name).await?.is_some() {
            tracing::debug!(category_name = %name, "Rejected duplicate category name");
            return Err(AppError::Conflict(
                "Category with the same name already exists".to_string(),
            ));
        }

        let category = self.categories.create(name).await?;
        tracing::info!(category_id = category.id, category_name = %category.name, "Category created");
        Ok(category)
    }

    pub async fn update_category(&self, id: i64, name: &str) -> AppResult<Category> {
        let existing = self.require_category(id).await?;
        let name = require_non_blank("Category name", name)?;

        if existing.name == name {
            return Err(AppError::Conflict(format!("The category name is already {}", name)));
        }
        if self.categories.find_by_name(name).await?.is_some() {
            return Err(AppError::Conflict(
                "Category with the same name already exists".to_string(),
            ));
        }

        self.categories
            .update(id, name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    /// Delete a category, returning what was removed
    pub async fn delete_category(&self, id: i64) -> AppResult<Category> {
        let category = self.require_category(id).await?;
        if !self.books.list_by_category(id).await?.is_empty() {
            return Err(AppError::Conflict(format!("Category {} still has books", id)));
        }
        if !self.categories.delete(id).await? {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }
        tracing::info!(category_id = id, "Category deleted");
        Ok(category)
    }

    async fn require_author(&self, id: i64) -> AppResult<Author> {
        self.authors
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    async fn require_category(&self, id: i64) -> AppResult<Category> {
        self.categories
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }
}
