//! Category endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::category::{Category, CategoryDetails, CategoryInput},
    AppState,
};

use super::{ApiJson, ApiPath, AuthenticatedUser};

#[utoipa::path(
    get,
    path = "/api/library/categories",
    tag = "categories",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of categories", body = Vec<Category>)
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> AppResult<Json<Vec<Category>>> {
    let categories = state.services.catalog.list_categories().await?;
    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/api/library/categories/{id}",
    tag = "categories",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category with its books", body = CategoryDetails),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<CategoryDetails>> {
    let category = state.services.catalog.get_category(id).await?;
    Ok(Json(category))
}

#[utoipa::path(
    post,
    path = "/api/library/categories",
    tag = "categories",
    security(("bearer_auth" = [])),
    request_body = CategoryInput,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Category name cannot be empty"),
        (status = 409, description = "Category with the same name already exists")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiJson(data): ApiJson<CategoryInput>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = state.services.catalog.create_category(&data.name).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    put,
    path = "/api/library/categories/{id}",
    tag = "categories",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Category ID")),
    request_body = CategoryInput,
    responses(
        (status = 200, description = "Category renamed", body = Category),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Name unchanged or already used")
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
    ApiJson(data): ApiJson<CategoryInput>,
) -> AppResult<Json<Category>> {
    let category = state.services.catalog.update_category(id, &data.name).await?;
    Ok(Json(category))
}

/// Delete a category and return it
#[utoipa::path(
    delete,
    path = "/api/library/categories/{id}",
    tag = "categories",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Deleted category", body = Category),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category still has books")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Category>> {
    let category = state.services.catalog.delete_category(id).await?;
    Ok(Json(category))
}
