//! Module for core business logic services.
//!
//! This module encapsulates services that perform specific business operations
//! and orchestrate interactions between the repositories, such as creating
//! users or enforcing book ownership.

pub mod book_service;
pub mod user_service;
