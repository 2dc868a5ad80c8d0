//! Application router assembly.
//!
//! Shared dependencies are handed to handlers as `Extension` layers so the
//! same router can be built against a real database in `main` and an
//! in-memory one in tests.

use crate::api::common::ApiResponse;
use crate::utils::jwt::JwtUtils;
use crate::utils::password::PasswordHasher;
use axum::{Extension, Router, response::Json, routing::get};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Builds the full HTTP surface: `/`, `/auth/*` and `/books/*`.
pub fn build_router(pool: SqlitePool, jwt_utils: Arc<JwtUtils>, hasher: PasswordHasher) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .nest("/auth", crate::auth::routes::auth_router())
        .nest("/books", crate::api::book::routes::book_router())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(pool))
        .layer(Extension(jwt_utils))
        .layer(Extension(hasher))
}

async fn root_handler() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        serde_json::json!({
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        }),
        "Welcome to the Book Catalog API",
    ))
}
