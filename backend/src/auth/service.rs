//! Core business logic for the authentication system.

use crate::auth::models::*;
use crate::database::models::{CreateNewUser, User};
use crate::errors::{ServiceError, ServiceResult};
use crate::services::user_service::UserService;
use crate::utils::jwt::JwtUtils;
use crate::utils::password::PasswordHasher;
use sqlx::SqlitePool;
use validator::Validate;

/// Authentication service for handling sign-up, login and token generation
pub struct AuthService<'a> {
    jwt_utils: &'a JwtUtils,
    user_service: UserService<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance
    pub fn new(pool: &'a SqlitePool, jwt_utils: &'a JwtUtils, hasher: PasswordHasher) -> Self {
        AuthService {
            jwt_utils,
            user_service: UserService::new(pool, hasher),
        }
    }

    /// Register a new user and issue a session token
    pub async fn register(&self, request: CreateNewUser) -> ServiceResult<AuthResponse> {
        let user = self.user_service.create_user(request).await?;
        tracing::info!("Registered user {}", user.id);

        self.issue(user)
    }

    /// Authenticate a user and issue a session token
    pub async fn authenticate(&self, login_request: LoginRequest) -> ServiceResult<AuthResponse> {
        login_request
            .validate()
            .map_err(ServiceError::from_validation_errors)?;

        let user = self
            .user_service
            .authenticate_user(&login_request.email, &login_request.password)
            .await?;

        self.issue(user)
    }

    /// Resolve the user a validated token was issued to
    pub async fn current_user(&self, user_id: &str) -> ServiceResult<UserInfo> {
        match self.user_service.get_user_required(user_id).await {
            Ok(user) => Ok(user.into()),
            Err(ServiceError::NotFound { .. }) => Err(ServiceError::unauthenticated(
                "Token subject no longer exists",
            )),
            Err(error) => Err(error),
        }
    }

    fn issue(&self, user: User) -> ServiceResult<AuthResponse> {
        let token = self.jwt_utils.generate_token(&user.id, &user.email)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
            expires_in: self.jwt_utils.expires_in(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;

    fn sign_up(email: &str, password: &str) -> CreateNewUser {
        CreateNewUser {
            email: email.to_string(),
            password: password.to_string(),
            name: "Ada".to_string(),
        }
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login_yields_same_identity() {
        let pool = test_pool().await;
        let jwt_utils = JwtUtils::new("test-secret", 3600);
        let service = AuthService::new(&pool, &jwt_utils, PasswordHasher::new(4));

        let registered = service
            .register(sign_up("a@example.com", "secret123"))
            .await
            .unwrap();
        assert_eq!(registered.user.email, "a@example.com");
        assert_eq!(registered.expires_in, 3600);

        let logged_in = service
            .authenticate(login("a@example.com", "secret123"))
            .await
            .unwrap();
        assert_eq!(logged_in.user, registered.user);

        let claims = jwt_utils.validate_token(&logged_in.token).unwrap();
        assert_eq!(claims.sub, registered.user.id);
        assert_eq!(claims.email, "a@example.com");

        let me = service.current_user(&claims.sub).await.unwrap();
        assert_eq!(me, registered.user);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let pool = test_pool().await;
        let jwt_utils = JwtUtils::new("test-secret", 3600);
        let service = AuthService::new(&pool, &jwt_utils, PasswordHasher::new(4));

        service
            .register(sign_up("a@example.com", "secret123"))
            .await
            .unwrap();
        let err = service
            .register(sign_up("a@example.com", "different"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_failures() {
        let pool = test_pool().await;
        let jwt_utils = JwtUtils::new("test-secret", 3600);
        let service = AuthService::new(&pool, &jwt_utils, PasswordHasher::new(4));
        service
            .register(sign_up("a@example.com", "secret123"))
            .await
            .unwrap();

        let err = service
            .authenticate(login("a@example.com", "wrong-password"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidCredentials));

        let err = service
            .authenticate(login("nobody@example.com", "secret123"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidCredentials));

        let err = service
            .authenticate(login("a@example.com", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_current_user_for_unknown_subject() {
        let pool = test_pool().await;
        let jwt_utils = JwtUtils::new("test-secret", 3600);
        let service = AuthService::new(&pool, &jwt_utils, PasswordHasher::new(4));

        let err = service.current_user("ghost").await.unwrap_err();
        assert!(matches!(err, ServiceError::Unauthenticated { .. }));
    }
}
