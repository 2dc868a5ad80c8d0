//! Database repository for book catalog operations.
//!
//! Provides CRUD operations for books. Mutating statements are scoped to the
//! owning user so a write can never touch another user's row.

use crate::database::models::{Book, BookWithOwner, CreateBook};
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

const BOOK_WITH_OWNER_SELECT: &str = r#"
    SELECT
    b.id, b.user_id, b.author, b.title, b.publisher, b.year, b.created_at, b.updated_at,
    u.email AS owner_email,
    u.name AS owner_name
    FROM books b
    JOIN users u ON u.id = b.user_id
"#;

/// Repository for book database operations.
pub struct BookRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> BookRepository<'a> {
    /// Creates a new BookRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new book owned by `book.user_id`.
    ///
    /// # Returns
    /// The newly created Book with all fields populated
    pub async fn create_book(&self, book: CreateBook) -> Result<Book> {
        let id = Uuid::now_v7().to_string();
        let now = Utc::now();

        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (id, user_id, author, title, publisher, year, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, user_id, author, title, publisher, year, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(book.user_id)
        .bind(book.author)
        .bind(book.title)
        .bind(book.publisher)
        .bind(book.year)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(book)
    }

    /// Retrieves every book together with its owner, oldest first.
    pub async fn get_books_with_owner(&self) -> Result<Vec<BookWithOwner>> {
        let query = format!("{} ORDER BY b.created_at ASC, b.id ASC", BOOK_WITH_OWNER_SELECT);

        let books = sqlx::query_as::<_, BookWithOwner>(&query)
            .fetch_all(self.pool)
            .await?;

        Ok(books)
    }

    /// Retrieves a book together with its owner.
    ///
    /// # Returns
    /// `Some(BookWithOwner)` if found, `None` otherwise
    pub async fn get_book_with_owner_by_id(&self, id: &str) -> Result<Option<BookWithOwner>> {
        let query = format!("{} WHERE b.id = ?", BOOK_WITH_OWNER_SELECT);

        let book = sqlx::query_as::<_, BookWithOwner>(&query)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(book)
    }

    /// Retrieves a book by its unique identifier.
    ///
    /// # Returns
    /// `Some(Book)` if found, `None` otherwise
    pub async fn get_book_by_id(&self, id: &str) -> Result<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, user_id, author, title, publisher, year, created_at, updated_at
            FROM books WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(book)
    }

    /// Overwrites the mutable fields of a book.
    ///
    /// The owner column is part of the filter, never of the `SET` list.
    ///
    /// # Returns
    /// The updated Book, or `None` if no row with that id and owner exists
    pub async fn update_book(&self, book: &Book) -> Result<Option<Book>> {
        let updated = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET author = ?, title = ?, publisher = ?, year = ?, updated_at = ?
            WHERE id = ? AND user_id = ?
            RETURNING id, user_id, author, title, publisher, year, created_at, updated_at
            "#,
        )
        .bind(&book.author)
        .bind(&book.title)
        .bind(&book.publisher)
        .bind(book.year)
        .bind(Utc::now())
        .bind(&book.id)
        .bind(&book.user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(updated)
    }

    /// Permanently deletes a book.
    ///
    /// # Returns
    /// `true` if a row owned by `owner_id` was removed
    pub async fn delete_book(&self, id: &str, owner_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
