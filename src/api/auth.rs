//! Registration, login and profile endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        profile::{ProfileInput, UserProfile},
        user::{LoginRequest, LoginResponse, RegisterUser, User},
    },
    AppState,
};

use super::{ApiJson, AuthenticatedUser};

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/users/register",
    tag = "auth",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "User registered", body = User),
        (status = 400, description = "Invalid email or empty password"),
        (status = 409, description = "Email address already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<RegisterUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.services.users.register(&data).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Login with email and password
#[utoipa::path(
    post,
    path = "/auth/users/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let response = state.services.users.login(&data).await?;
    Ok(Json(response))
}

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/auth/users/profile",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile", body = UserProfile),
        (status = 404, description = "No profile yet")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<UserProfile>> {
    let profile = state.services.users.get_profile(claims.user_id).await?;
    Ok(Json(profile))
}

/// Create or replace the authenticated user's profile
#[utoipa::path(
    put,
    path = "/auth/users/profile",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = ProfileInput,
    responses(
        (status = 200, description = "Profile saved", body = UserProfile),
        (status = 400, description = "Missing full name or location")
    )
)]
pub async fn upsert_profile(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiJson(data): ApiJson<ProfileInput>,
) -> AppResult<Json<UserProfile>> {
    let profile = state.services.users.upsert_profile(claims.user_id, &data).await?;
    Ok(Json(profile))
}
