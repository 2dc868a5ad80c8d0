//! Module for book API endpoints.
//!
//! Listing and reading books is public; creating, updating and deleting
//! require a bearer token, and the latter two only succeed for the owner.

pub mod handlers;
pub mod models;
pub mod routes;
