//! Authentication and user account service

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use validator::Validate;

use super::require_non_blank;
use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{
        profile::{ProfileInput, UserProfile},
        user::{LoginRequest, LoginResponse, RegisterUser, User, UserClaims},
    },
    repository::{ProfilesRepository, UsersRepository},
};

const INVALID_CREDENTIALS: &str = "Invalid email address or password";

#[derive(Clone)]
pub struct UsersService {
    users: Arc<dyn UsersRepository>,
    profiles: Arc<dyn ProfilesRepository>,
    config: AuthConfig,
}

impl UsersService {
    pub fn new(
        users: Arc<dyn UsersRepository>,
        profiles: Arc<dyn ProfilesRepository>,
        config: AuthConfig,
    ) -> Self {
        Self {
            users,
            profiles,
            config,
        }
    }

    /// Register a new user with a hashed password
    pub async fn register(&self, data: &RegisterUser) -> AppResult<User> {
        data.validate()?;
        let email = data.email_address.trim();

        if self.users.find_by_email(email).await?.is_some() {
            tracing::debug!(email, "Rejected duplicate registration");
            return Err(AppError::Conflict(format!(
                "User with email address {} already exists",
                email
            )));
        }

        let hash = self.hash_password(&data.password)?;
        let user = self.users.create(email, &hash).await?;
        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Authenticate by email and password and issue a JWT
    pub async fn login(&self, data: &LoginRequest) -> AppResult<LoginResponse> {
        let user = self
            .users
            .find_by_email(data.email_address.trim())
            .await?
            .ok_or_else(|| AppError::Authentication(INVALID_CREDENTIALS.to_string()))?;

        if !self.verify_password(&user, &data.password)? {
            tracing::debug!(user_id = user.id, "Rejected login with wrong password");
            return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
        }

        let claims = UserClaims::new(&user, self.config.jwt_expiration_hours);
        let jwt = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        tracing::info!(user_id = user.id, "User logged in");

        Ok(LoginResponse {
            jwt,
            token_type: "Bearer".to_string(),
            expires_in: claims.exp - claims.iat,
        })
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<User> {
        self.users
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    pub async fn get_profile(&self, user_id: i64) -> AppResult<UserProfile> {
        self.profiles
            .get_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", user_id)))
    }

    /// Create or replace the user's profile
    pub async fn upsert_profile(&self, user_id: i64, data: &ProfileInput) -> AppResult<UserProfile> {
        self.get_by_id(user_id).await?;
        let data = ProfileInput {
            full_name: require_non_blank("Full name", &data.full_name)?.to_string(),
            date_of_birth: data.date_of_birth,
            location: require_non_blank("Location", &data.location)?.to_string(),
        };

        let profile = self.profiles.upsert(user_id, &data).await?;
        tracing::info!(user_id, profile_id = profile.id, "Profile saved");
        Ok(profile)
    }

    /// Verify user password
    fn verify_password(&self, user: &User, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&user.password)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password using Argon2
    fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{memory::MemoryRepository, MockProfilesRepository, MockUsersRepository};
    use chrono::{NaiveDate, Utc};

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_expiration_hours: 2,
        }
    }

    fn memory_users() -> (UsersService, Arc<MemoryRepository>) {
        let store = Arc::new(MemoryRepository::new());
        (UsersService::new(store.clone(), store.clone(), config()), store)
    }

    fn register(email: &str, password: &str) -> RegisterUser {
        RegisterUser {
            email_address: email.to_string(),
            password: password.to_string(),
        }
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email_address: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn stored_password_is_never_the_plaintext() {
        let (service, store) = memory_users();
        let user = service.register(&register("ada@example.com", "hunter2")).await.unwrap();

        let stored = UsersRepository::get_by_id(store.as_ref(), user.id).await.unwrap().unwrap();
        assert_ne!(stored.password, "hunter2");
        assert!(stored.password.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn existing_email_is_rejected() {
        let mut users = MockUsersRepository::new();
        users.expect_find_by_email().times(1).returning(|_| {
            Ok(Some(User {
                id: 1,
                email_address: "ada@example.com".into(),
                password: "hash".into(),
                created_at: Utc::now(),
            }))
        });
        users.expect_create().never();

        let service = UsersService::new(
            Arc::new(users),
            Arc::new(MockProfilesRepository::new()),
            config(),
        );

        let err = service.register(&register("ada@example.com", "pw")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn email_uniqueness_ignores_case() {
        let (service, _) = memory_users();
        service.register(&register("ada@example.com", "pw")).await.unwrap();

        let err = service.register(&register("ADA@example.com", "pw")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn invalid_registration_is_a_validation_error() {
        let (service, _) = memory_users();
        let err = service.register(&register("nope", "pw")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn valid_login_returns_a_verifiable_token() {
        let (service, _) = memory_users();
        let user = service.register(&register("ada@example.com", "hunter2")).await.unwrap();

        let response = service.login(&login("ada@example.com", "hunter2")).await.unwrap();
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 2 * 3600);

        let claims = UserClaims::from_token(&response.jwt, "test-secret").unwrap();
        assert_eq!(claims.user_id, user.id);
        assert_eq!(claims.sub, "ada@example.com");
    }

    #[tokio::test]
    async fn invalid_credentials_are_unauthorized() {
        let (service, _) = memory_users();
        service.register(&register("ada@example.com", "hunter2")).await.unwrap();

        let wrong_password = service.login(&login("ada@example.com", "hunter3")).await;
        assert!(matches!(wrong_password, Err(AppError::Authentication(_))));

        let unknown_user = service.login(&login("bob@example.com", "hunter2")).await;
        assert!(matches!(unknown_user, Err(AppError::Authentication(_))));
    }

    #[tokio::test]
    async fn profile_is_created_then_replaced() {
        let (service, _) = memory_users();
        let user = service.register(&register("ada@example.com", "pw")).await.unwrap();

        let err = service.get_profile(user.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let input = |location: &str| ProfileInput {
            full_name: "Ada Lovelace".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1815, 12, 10).unwrap(),
            location: location.into(),
        };

        let first = service.upsert_profile(user.id, &input("London")).await.unwrap();
        let second = service.upsert_profile(user.id, &input("Marylebone")).await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(service.get_profile(user.id).await.unwrap().location, "Marylebone");

        let err = service.upsert_profile(user.id, &input(" ")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
