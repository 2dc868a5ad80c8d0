//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the book catalog endpoints
//! and the shared response types, excluding core authentication routes which
//! are handled separately.

pub mod book;
pub mod common;
