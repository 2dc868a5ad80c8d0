//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. Note that these differ from the API-facing views in
//! `auth::models` and `api::book::models`, which never carry a password hash.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sign-up data as received from the client.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateNewUser {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Must be a valid email")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1-255 characters"
    ))]
    pub name: String,
}

/// Insert payload for a user whose password has already been hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct Book {
    pub id: String,
    /// Owner of the book, fixed at creation.
    pub user_id: String,
    pub author: String,
    pub title: String,
    pub publisher: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Book row joined with the public fields of its owner.
#[derive(Debug, Clone, FromRow)]
pub struct BookWithOwner {
    #[sqlx(flatten)]
    pub book: Book,
    pub owner_email: String,
    pub owner_name: String,
}

#[derive(Debug, Clone)]
pub struct CreateBook {
    pub user_id: String,
    pub author: String,
    pub title: String,
    pub publisher: String,
    pub year: i32,
}
