//! Book business logic service.
//!
//! Reads are public. Every mutation re-reads the book from storage and checks
//! ownership with `auth::ownership` before anything is written.

use crate::api::book::models::{BookResponse, CreateBookRequest, UpdateBookRequest};
use crate::auth::ownership::ensure_can_mutate;
use crate::database::models::CreateBook;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::book_repository::BookRepository;
use crate::repositories::user_repository::UserRepository;
use sqlx::SqlitePool;
use validator::Validate;

/// Service layer for book operations.
pub struct BookService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> BookService<'a> {
    /// Creates a new BookService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a book owned by the acting user.
    ///
    /// # Errors
    /// Returns `ServiceError` for:
    /// - Missing fields or a year outside 1000..=9999
    /// - An acting user that no longer exists
    pub async fn create_book(
        &self,
        acting_user_id: &str,
        request: CreateBookRequest,
    ) -> ServiceResult<BookResponse> {
        request
            .validate()
            .map_err(ServiceError::from_validation_errors)?;

        let user_repo = UserRepository::new(self.pool);
        if user_repo.get_user_by_id(acting_user_id).await?.is_none() {
            return Err(ServiceError::unauthenticated(
                "Token subject no longer exists",
            ));
        }

        let repo = BookRepository::new(self.pool);
        let book = repo
            .create_book(CreateBook {
                user_id: acting_user_id.to_string(),
                author: request.author,
                title: request.title,
                publisher: request.publisher,
                year: request.year,
            })
            .await?;

        tracing::info!("User {} created book {}", acting_user_id, book.id);
        Ok(book.into())
    }

    /// Lists every book in the catalog, regardless of owner.
    pub async fn list_books(&self) -> ServiceResult<Vec<BookResponse>> {
        let repo = BookRepository::new(self.pool);
        let books = repo.get_books_with_owner().await?;

        Ok(books.into_iter().map(BookResponse::from).collect())
    }

    /// Retrieves a book by ID, returning error if not found.
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if the book doesn't exist
    pub async fn get_book_required(&self, id: &str) -> ServiceResult<BookResponse> {
        let repo = BookRepository::new(self.pool);
        let book = repo
            .get_book_with_owner_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Book", id))?;

        Ok(book.into())
    }

    /// Applies the supplied fields to a book owned by the acting user.
    ///
    /// # Errors
    /// Returns `ServiceError` for:
    /// - Invalid supplied fields (nothing is written)
    /// - `NotFound` if the book doesn't exist
    /// - `PermissionDenied` if the acting user is not the owner
    pub async fn update_book(
        &self,
        id: &str,
        acting_user_id: &str,
        request: UpdateBookRequest,
    ) -> ServiceResult<BookResponse> {
        request
            .validate()
            .map_err(ServiceError::from_validation_errors)?;

        let repo = BookRepository::new(self.pool);
        let mut book = repo
            .get_book_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Book", id))?;

        if let Err(error) = ensure_can_mutate(acting_user_id, &book.user_id, "update") {
            tracing::warn!("User {} attempted to update book {}", acting_user_id, id);
            return Err(error);
        }

        request.apply_to(&mut book);

        // None here means the row was deleted after the read above.
        let updated = repo
            .update_book(&book)
            .await?
            .ok_or_else(|| ServiceError::not_found("Book", id))?;

        tracing::info!("User {} updated book {}", acting_user_id, id);
        Ok(updated.into())
    }

    /// Deletes a book owned by the acting user.
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` or `ServiceError::PermissionDenied`
    pub async fn delete_book(&self, id: &str, acting_user_id: &str) -> ServiceResult<()> {
        let repo = BookRepository::new(self.pool);
        let book = repo
            .get_book_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Book", id))?;

        if let Err(error) = ensure_can_mutate(acting_user_id, &book.user_id, "delete") {
            tracing::warn!("User {} attempted to delete book {}", acting_user_id, id);
            return Err(error);
        }

        if !repo.delete_book(id, &book.user_id).await? {
            return Err(ServiceError::not_found("Book", id));
        }

        tracing::info!("User {} deleted book {}", acting_user_id, id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::CreateUser;
    use crate::database::test_pool;

    async fn seed_user(pool: &SqlitePool, email: &str) -> String {
        UserRepository::new(pool)
            .create_user(CreateUser {
                email: email.to_string(),
                password_hash: "hash".to_string(),
                name: email.to_string(),
            })
            .await
            .unwrap()
            .id
    }

    fn dune() -> CreateBookRequest {
        CreateBookRequest {
            author: "Frank Herbert".to_string(),
            title: "Dune".to_string(),
            publisher: "Chilton".to_string(),
            year: 1965,
        }
    }

    #[tokio::test]
    async fn test_create_sets_owner_and_reads_are_public() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@example.com").await;
        let service = BookService::new(&pool);

        let created = service.create_book(&owner, dune()).await.unwrap();
        assert_eq!(created.user_id, owner);
        assert_eq!(created.title, "Dune");

        let fetched = service.get_book_required(&created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.user.unwrap().email, "owner@example.com");

        let all = service.list_books().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_year_out_of_range() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@example.com").await;
        let service = BookService::new(&pool);

        for year in [0, 999, 10000, -1965] {
            let request = CreateBookRequest { year, ..dune() };
            let err = service.create_book(&owner, request).await.unwrap_err();
            assert!(matches!(err, ServiceError::Validation { .. }));
        }
        assert!(service.list_books().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_requires_existing_user() {
        let pool = test_pool().await;
        let service = BookService::new(&pool);

        let err = service.create_book("ghost", dune()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Unauthenticated { .. }));
    }

    #[tokio::test]
    async fn test_get_missing_book() {
        let pool = test_pool().await;
        let service = BookService::new(&pool);

        let err = service.get_book_required("missing").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_partial_update_by_owner() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@example.com").await;
        let service = BookService::new(&pool);
        let created = service.create_book(&owner, dune()).await.unwrap();

        let update = UpdateBookRequest {
            title: Some("Dune Messiah".to_string()),
            ..Default::default()
        };
        let updated = service
            .update_book(&created.id, &owner, update)
            .await
            .unwrap();

        assert_eq!(updated.title, "Dune Messiah");
        assert_eq!(updated.author, "Frank Herbert");
        assert_eq!(updated.publisher, "Chilton");
        assert_eq!(updated.year, 1965);
        assert_eq!(updated.user_id, owner);
    }

    #[tokio::test]
    async fn test_non_owner_update_never_applies() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@example.com").await;
        let intruder = seed_user(&pool, "intruder@example.com").await;
        let service = BookService::new(&pool);
        let created = service.create_book(&owner, dune()).await.unwrap();

        let update = UpdateBookRequest {
            title: Some("Defaced".to_string()),
            year: Some(2000),
            ..Default::default()
        };
        let err = service
            .update_book(&created.id, &intruder, update)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::PermissionDenied { .. }));

        let unchanged = service.get_book_required(&created.id).await.unwrap();
        assert_eq!(unchanged.title, "Dune");
        assert_eq!(unchanged.year, 1965);
    }

    #[tokio::test]
    async fn test_invalid_update_never_applies() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@example.com").await;
        let service = BookService::new(&pool);
        let created = service.create_book(&owner, dune()).await.unwrap();

        let update = UpdateBookRequest {
            title: Some("Valid".to_string()),
            year: Some(42),
            ..Default::default()
        };
        let err = service
            .update_book(&created.id, &owner, update)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation { .. }));

        let unchanged = service.get_book_required(&created.id).await.unwrap();
        assert_eq!(unchanged.title, "Dune");
    }

    #[tokio::test]
    async fn test_update_missing_book() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@example.com").await;
        let service = BookService::new(&pool);

        let err = service
            .update_book("missing", &owner, UpdateBookRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_is_owner_only() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@example.com").await;
        let intruder = seed_user(&pool, "intruder@example.com").await;
        let service = BookService::new(&pool);
        let created = service.create_book(&owner, dune()).await.unwrap();

        let err = service
            .delete_book(&created.id, &intruder)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::PermissionDenied { .. }));
        assert!(service.get_book_required(&created.id).await.is_ok());

        service.delete_book(&created.id, &owner).await.unwrap();

        let err = service.get_book_required(&created.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));

        let err = service.delete_book(&created.id, &owner).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }
}
