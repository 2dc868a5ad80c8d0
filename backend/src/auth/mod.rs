//! Authentication module for managing user accounts, sessions, and access control.
//!
//! This module provides the public interface for sign-up, login, token
//! verification middleware and the ownership rule for book mutations.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod ownership;
pub mod routes;
pub mod service;
