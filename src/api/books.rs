//! Book endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        book::{Book, CreateAuthorBookQuery, CreateBook, UpdateBook},
        MessageResponse,
    },
    AppState,
};

use super::{ApiJson, ApiPath, ApiQuery, AuthenticatedUser};

/// List all books
#[utoipa::path(
    get,
    path = "/api/library/books",
    tag = "books",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of books", body = Vec<Book>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/api/library/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/api/library/books",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Title cannot be empty"),
        (status = 404, description = "Author or category not found"),
        (status = 409, description = "Book with the same title already exists")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiJson(data): ApiJson<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.catalog.create_book(&data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Create a book for an author (title, ISBN and category given as query parameters)
#[utoipa::path(
    post,
    path = "/api/library/authors/{id}/books",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Author ID"), CreateAuthorBookQuery),
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Title cannot be empty"),
        (status = 404, description = "Author or category not found"),
        (status = 409, description = "Book with the same title already exists")
    )
)]
pub async fn create_author_book(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath(author_id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<CreateAuthorBookQuery>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let data = query.into_create_book(author_id);
    let book = state.services.catalog.create_book(&data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/api/library/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book, author or category not found"),
        (status = 409, description = "Duplicate title, or availability differs from the lending state")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
    ApiJson(data): ApiJson<UpdateBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.update_book(id, &data).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/library/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.delete_book(id).await?;
    Ok(Json(MessageResponse::new("Book deleted successfully")))
}

/// Borrow a book as the authenticated user
#[utoipa::path(
    post,
    path = "/api/library/books/{id}/borrow",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book borrowed", body = Book),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book is not available")
    )
)]
pub async fn borrow_book(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.borrow_book(id, claims.user_id).await?;
    Ok(Json(book))
}

/// Return a book borrowed by the authenticated user
#[utoipa::path(
    post,
    path = "/api/library/books/{id}/return",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book returned", body = Book),
        (status = 403, description = "Book is borrowed by another user"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book is not borrowed")
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.return_book(id, claims.user_id).await?;
    Ok(Json(book))
}
