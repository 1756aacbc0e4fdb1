//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, authors, books, categories, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "1.0.0",
        description = "Library Catalog REST API"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::get_profile,
        auth::upsert_profile,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::create_author_book,
        books::update_book,
        books::delete_book,
        books::borrow_book,
        books::return_book,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        // Categories
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
    ),
    components(
        schemas(
            // Auth
            crate::models::user::User,
            crate::models::user::RegisterUser,
            crate::models::user::LoginRequest,
            crate::models::user::LoginResponse,
            crate::models::profile::UserProfile,
            crate::models::profile::ProfileInput,
            // Catalog
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::author::Author,
            crate::models::author::AuthorDetails,
            crate::models::author::AuthorInput,
            crate::models::category::Category,
            crate::models::category::CategoryDetails,
            crate::models::category::CategoryInput,
            crate::models::MessageResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Registration, login and profile"),
        (name = "books", description = "Book management"),
        (name = "authors", description = "Author management"),
        (name = "categories", description = "Category management")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
