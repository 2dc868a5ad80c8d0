//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle sign-up, login and identity lookup, and are
//! nested under `/auth` by the application router.

use crate::auth::handlers::*;
use crate::auth::middleware::*;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Creates the authentication router with all auth-related routes
pub fn auth_router() -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/signin", post(login))
        .route("/me", get(me).layer(middleware::from_fn(jwt_auth)))
}
