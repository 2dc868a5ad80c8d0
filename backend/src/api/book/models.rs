//! Request and response shapes for the book endpoints.

use crate::auth::models::UserInfo;
use crate::database::models::{Book, BookWithOwner};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for creating a book; every field is required.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateBookRequest {
    #[validate(length(min = 1, max = 255, message = "Author is required"))]
    pub author: String,

    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, max = 255, message = "Publisher is required"))]
    pub publisher: String,

    #[validate(range(
        min = 1000,
        max = 9999,
        message = "Year must be between 1000 and 9999"
    ))]
    pub year: i32,
}

/// Partial update: a field that is absent (or `null`) keeps its current value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateBookRequest {
    #[validate(length(min = 1, max = 255, message = "Author cannot be empty"))]
    pub author: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Title cannot be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Publisher cannot be empty"))]
    pub publisher: Option<String>,

    #[validate(range(
        min = 1000,
        max = 9999,
        message = "Year must be between 1000 and 9999"
    ))]
    pub year: Option<i32>,
}

impl UpdateBookRequest {
    /// Overwrites only the fields that were supplied.
    pub fn apply_to(self, book: &mut Book) {
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(publisher) = self.publisher {
            book.publisher = publisher;
        }
        if let Some(year) = self.year {
            book.year = year;
        }
    }
}

/// External shape of a book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookResponse {
    pub id: String,
    pub user_id: String,
    pub author: String,
    pub title: String,
    pub publisher: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Owner details, present on read endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            user_id: book.user_id,
            author: book.author,
            title: book.title,
            publisher: book.publisher,
            year: book.year,
            created_at: book.created_at,
            updated_at: book.updated_at,
            user: None,
        }
    }
}

impl From<BookWithOwner> for BookResponse {
    fn from(row: BookWithOwner) -> Self {
        let owner = UserInfo {
            id: row.book.user_id.clone(),
            email: row.owner_email,
            name: row.owner_name,
        };

        Self {
            user: Some(owner),
            ..Self::from(row.book)
        }
    }
}
