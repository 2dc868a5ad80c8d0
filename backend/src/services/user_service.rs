//! User business logic service.
//!
//! Handles user creation, credential checks and lookups.

use crate::database::models::{CreateNewUser, CreateUser, User};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use crate::utils::password::PasswordHasher;
use sqlx::SqlitePool;
use validator::Validate;

/// Shortest password accepted at sign-up.
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub struct UserService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
    hasher: PasswordHasher,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    /// * `hasher` - Password hasher configured with the bcrypt cost
    pub fn new(pool: &'a SqlitePool, hasher: PasswordHasher) -> Self {
        Self { pool, hasher }
    }

    /// Creates a new user with full validation.
    ///
    /// # Arguments
    /// * `create_user` - User creation data transfer object
    ///
    /// # Returns
    /// The newly created User with all fields populated
    ///
    /// # Errors
    /// Returns `ServiceError` for:
    /// - Duplicate emails (checked before anything else)
    /// - Validation failures
    /// - Passwords shorter than `MIN_PASSWORD_LENGTH`
    pub async fn create_user(&self, create_user: CreateNewUser) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);

        if repo.email_exists(&create_user.email).await? {
            return Err(ServiceError::already_exists("User", &create_user.email));
        }

        create_user
            .validate()
            .map_err(ServiceError::from_validation_errors)?;

        if create_user.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ServiceError::WeakPassword {
                min_length: MIN_PASSWORD_LENGTH,
            });
        }

        let password_hash = self.hasher.hash_password(&create_user.password)?;

        self.insert_user(CreateUser {
            email: create_user.email,
            password_hash,
            name: create_user.name,
        })
        .await
    }

    /// Persists an already validated user.
    ///
    /// A unique-email violation here means a concurrent sign-up won the race
    /// after the pre-check, and is reported the same way as the pre-check.
    async fn insert_user(&self, data: CreateUser) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);
        let email = data.email.clone();

        match repo.create_user(data).await {
            Ok(user) => Ok(user),
            Err(error) if is_unique_violation(&error) => {
                Err(ServiceError::already_exists("User", email))
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Verifies an email/password pair.
    ///
    /// # Errors
    /// Returns `ServiceError::InvalidCredentials` for an unknown email and for
    /// a wrong password alike.
    pub async fn authenticate_user(&self, email: &str, password: &str) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);

        let Some(user) = repo.get_user_by_email(email).await? else {
            tracing::warn!("Login attempt for unknown email");
            return Err(ServiceError::InvalidCredentials);
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            tracing::warn!("Login attempt with wrong password for user {}", user.id);
            return Err(ServiceError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Retrieves a user by ID with existence verification.
    ///
    /// # Arguments
    /// * `id` - User ID (UUID format)
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if user doesn't exist
    pub async fn get_user_required(&self, id: &str) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);
        let user = repo
            .get_user_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))?;
        Ok(user)
    }
}

fn is_unique_violation(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .is_some_and(|e| e.is_unique_violation())
}
