//! Persistence access for the catalog entities.

pub mod book_repository;
pub mod user_repository;
