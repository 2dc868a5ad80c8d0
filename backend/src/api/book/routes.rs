//! Defines the HTTP routes for the book catalog.

use super::handlers::{create_book, delete_book, get_book, list_books, update_book};
use crate::auth::middleware::jwt_auth;
use axum::{
    Router, middleware,
    routing::{get, post, put},
};

pub fn book_router() -> Router {
    let public = Router::new()
        .route("/", get(list_books))
        .route("/{id}", get(get_book));

    let protected = Router::new()
        .route("/", post(create_book))
        .route("/{id}", put(update_book).delete(delete_book))
        .route_layer(middleware::from_fn(jwt_auth));

    public.merge(protected)
}
