//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for sign-up, login and
//! identity lookup, and hand the parsed payloads to `auth::service`.

use crate::api::common::{ApiResponse, json_rejection_to_http, service_error_to_http};
use crate::auth::models::*;
use crate::auth::service::AuthService;
use crate::database::models::CreateNewUser;
use crate::utils::jwt::{Claims, JwtUtils};
use crate::utils::password::PasswordHasher;
use axum::{
    extract::{Extension, Json, rejection::JsonRejection},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Handle user sign-up request
#[axum::debug_handler]
pub async fn signup(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt_utils): Extension<Arc<JwtUtils>>,
    Extension(hasher): Extension<PasswordHasher>,
    payload: Result<Json<CreateNewUser>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<ApiResponse<AuthResponse>>), (StatusCode, String)> {
    let Json(payload) = payload.map_err(json_rejection_to_http)?;
    let auth_service = AuthService::new(&pool, &jwt_utils, hasher);

    match auth_service.register(payload).await {
        Ok(response) => Ok((
            StatusCode::CREATED,
            ResponseJson(ApiResponse::success(response, "User created successfully")),
        )),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt_utils): Extension<Arc<JwtUtils>>,
    Extension(hasher): Extension<PasswordHasher>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ResponseJson<ApiResponse<AuthResponse>>, (StatusCode, String)> {
    let Json(payload) = payload.map_err(json_rejection_to_http)?;
    let auth_service = AuthService::new(&pool, &jwt_utils, hasher);

    match auth_service.authenticate(payload).await {
        Ok(response) => Ok(ResponseJson(ApiResponse::success(
            response,
            "Login successful",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Get current user information from token
#[axum::debug_handler]
pub async fn me(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt_utils): Extension<Arc<JwtUtils>>,
    Extension(hasher): Extension<PasswordHasher>,
    Extension(claims): Extension<Claims>,
) -> Result<ResponseJson<ApiResponse<UserInfo>>, (StatusCode, String)> {
    let auth_service = AuthService::new(&pool, &jwt_utils, hasher);

    match auth_service.current_user(claims.user_id()).await {
        Ok(user) => Ok(ResponseJson(ApiResponse::ok(user))),
        Err(error) => Err(service_error_to_http(error)),
    }
}
