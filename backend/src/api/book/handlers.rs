//! Handler functions for book API endpoints.

use super::models::{BookResponse, CreateBookRequest, UpdateBookRequest};
use crate::api::common::{
    ApiResponse, invalid_id_response, json_rejection_to_http, service_error_to_http,
};
use crate::services::book_service::BookService;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json, Path, rejection::JsonRejection},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;
use uuid::Uuid;

fn parse_book_id(id: &str) -> Result<String, (StatusCode, String)> {
    Uuid::parse_str(id)
        .map(|uuid| uuid.to_string())
        .map_err(|_| invalid_id_response(id))
}

#[axum::debug_handler]
pub async fn list_books(
    Extension(pool): Extension<SqlitePool>,
) -> Result<ResponseJson<ApiResponse<Vec<BookResponse>>>, (StatusCode, String)> {
    let service = BookService::new(&pool);

    match service.list_books().await {
        Ok(books) => Ok(ResponseJson(ApiResponse::success(
            books,
            "Books retrieved successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

#[axum::debug_handler]
pub async fn get_book(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<String>,
) -> Result<ResponseJson<ApiResponse<BookResponse>>, (StatusCode, String)> {
    let id = parse_book_id(&id)?;
    let service = BookService::new(&pool);

    match service.get_book_required(&id).await {
        Ok(book) => Ok(ResponseJson(ApiResponse::success(
            book,
            "Book retrieved successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

#[axum::debug_handler]
pub async fn create_book(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<ApiResponse<BookResponse>>), (StatusCode, String)> {
    let Json(payload) = payload.map_err(json_rejection_to_http)?;
    let service = BookService::new(&pool);

    match service.create_book(claims.user_id(), payload).await {
        Ok(book) => Ok((
            StatusCode::CREATED,
            ResponseJson(ApiResponse::success(book, "Book created successfully")),
        )),
        Err(error) => Err(service_error_to_http(error)),
    }
}

#[axum::debug_handler]
pub async fn update_book(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateBookRequest>, JsonRejection>,
) -> Result<ResponseJson<ApiResponse<BookResponse>>, (StatusCode, String)> {
    let id = parse_book_id(&id)?;
    let Json(payload) = payload.map_err(json_rejection_to_http)?;
    let service = BookService::new(&pool);

    match service.update_book(&id, claims.user_id(), payload).await {
        Ok(book) => Ok(ResponseJson(ApiResponse::success(
            book,
            "Book updated successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

#[axum::debug_handler]
pub async fn delete_book(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<ResponseJson<ApiResponse<()>>, (StatusCode, String)> {
    let id = parse_book_id(&id)?;
    let service = BookService::new(&pool);

    match service.delete_book(&id, claims.user_id()).await {
        Ok(()) => Ok(ResponseJson(ApiResponse::success(
            (),
            "Book deleted successfully",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}
