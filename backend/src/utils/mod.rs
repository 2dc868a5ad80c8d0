//! Credential helpers shared by the auth and book flows.
//!
//! Token issuance/validation lives in `jwt`, password hashing in `password`.

pub mod jwt;
pub mod password;
