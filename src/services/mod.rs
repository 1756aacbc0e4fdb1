//! Business logic services

pub mod catalog;
pub mod users;

use std::sync::Arc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    repository::{
        AuthorsRepository, BooksRepository, CategoriesRepository, HealthCheck,
        ProfilesRepository, UsersRepository,
    },
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub users: users::UsersService,
    pub health: Arc<dyn HealthCheck>,
}

impl Services {
    /// Create all services backed by the given store
    pub fn new<R>(store: Arc<R>, auth_config: AuthConfig) -> Self
    where
        R: BooksRepository
            + AuthorsRepository
            + CategoriesRepository
            + UsersRepository
            + ProfilesRepository
            + HealthCheck
            + 'static,
    {
        Self {
            catalog: catalog::CatalogService::new(store.clone(), store.clone(), store.clone()),
            users: users::UsersService::new(store.clone(), store.clone(), auth_config),
            health: store,
        }
    }
}

/// Reject empty or whitespace-only required fields, returning the trimmed value
pub(crate) fn require_non_blank<'a>(field: &str, value: &'a str) -> AppResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed)
}
