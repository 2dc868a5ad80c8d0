//! Password hashing and verification backed by bcrypt.

use crate::errors::{ServiceError, ServiceResult};
use bcrypt::{hash, verify};

/// Hashes and verifies passwords with a fixed bcrypt work factor.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password before storing it in the database
    ///
    /// # Errors
    /// Returns `ServiceError` if hashing fails
    pub fn hash_password(&self, password: &str) -> ServiceResult<String> {
        hash(password, self.cost)
            .map_err(|e| ServiceError::internal_error(format!("Password hashing failed: {}", e)))
    }

    /// Verify a password against the stored hash
    ///
    /// # Returns
    /// `true` if password matches hash, `false` otherwise
    ///
    /// # Errors
    /// Returns `ServiceError` if the stored hash cannot be parsed
    pub fn verify_password(&self, password: &str, hash: &str) -> ServiceResult<bool> {
        verify(password, hash).map_err(|e| {
            ServiceError::internal_error(format!("Password verification failed: {}", e))
        })
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
