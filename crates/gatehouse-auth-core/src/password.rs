//! Password hashing and verification

use crate::AccountError;

/// Fixed bcrypt work factor for all stored hashes
const BCRYPT_COST: u32 = 10;

/// One-way password hasher backed by bcrypt
///
/// Narrow hash/verify surface so the backing library can be swapped
/// without touching callers.
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Create a hasher with the production work factor
    pub fn new() -> Self {
        Self { cost: BCRYPT_COST }
    }

    /// Create a hasher with a custom work factor (tests use a cheap one)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password
    pub fn hash(&self, password: &str) -> Result<String, AccountError> {
        bcrypt::hash(password, self.cost).map_err(|e| {
            tracing::error!("password hashing failed: {}", e);
            AccountError::Internal(e.to_string())
        })
    }

    /// Check a plaintext password against a stored hash
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AccountError> {
        bcrypt::verify(password, hash).map_err(|e| {
            tracing::error!("password verification failed: {}", e);
            AccountError::Internal(e.to_string())
        })
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}
