//! Middleware for protecting authenticated routes.
//!
//! Validates the bearer token on the request and makes the resulting
//! `Claims` available to handlers through request extensions.

use crate::api::common::service_error_to_http;
use crate::errors::ServiceError;
use crate::utils::jwt::JwtUtils;
use axum::{
    extract::{Extension, Request},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// JWT authentication middleware
pub async fn jwt_auth(
    Extension(jwt_utils): Extension<Arc<JwtUtils>>,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| {
            service_error_to_http(ServiceError::unauthenticated(
                "Missing authorization header",
            ))
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            service_error_to_http(ServiceError::unauthenticated(
                "Authorization header must be a bearer token",
            ))
        })?;

    let claims = jwt_utils
        .validate_token(token)
        .map_err(service_error_to_http)?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
