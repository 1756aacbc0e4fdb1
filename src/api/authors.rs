//! Author endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        author::{Author, AuthorDetails, AuthorInput},
        MessageResponse,
    },
    AppState,
};

use super::{ApiJson, ApiPath, AuthenticatedUser};

/// List all authors
#[utoipa::path(
    get,
    path = "/api/library/authors",
    tag = "authors",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of authors", body = Vec<Author>)
    )
)]
pub async fn list_authors(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> AppResult<Json<Vec<Author>>> {
    let authors = state.services.catalog.list_authors().await?;
    Ok(Json(authors))
}

/// Get an author with their books
#[utoipa::path(
    get,
    path = "/api/library/authors/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = AuthorDetails),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<AuthorDetails>> {
    let author = state.services.catalog.get_author(id).await?;
    Ok(Json(author))
}

/// Create an author (returns the existing author when the name is taken)
#[utoipa::path(
    post,
    path = "/api/library/authors",
    tag = "authors",
    security(("bearer_auth" = [])),
    request_body = AuthorInput,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 200, description = "Author with this name already exists", body = Author),
        (status = 400, description = "Author name cannot be empty")
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiJson(data): ApiJson<AuthorInput>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let (author, created) = state.services.catalog.create_author(&data.name).await?;
    let status = if created { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(author)))
}

/// Rename an author
#[utoipa::path(
    put,
    path = "/api/library/authors/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Author ID")),
    request_body = AuthorInput,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
    ApiJson(data): ApiJson<AuthorInput>,
) -> AppResult<Json<Author>> {
    let author = state.services.catalog.update_author(id, &data.name).await?;
    Ok(Json(author))
}

/// Delete an author without books
#[utoipa::path(
    delete,
    path = "/api/library/authors/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author deleted", body = MessageResponse),
        (status = 404, description = "Author not found"),
        (status = 409, description = "Author still has books")
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.delete_author(id).await?;
    Ok(Json(MessageResponse::new("Author deleted successfully")))
}
