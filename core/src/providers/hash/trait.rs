//! Hash provider trait defining one-way credential hashing.

use async_trait::async_trait;

use crate::errors::DomainError;

/// One-way hashing of user credentials
///
/// Implementations decide the algorithm and salt handling; callers only ever
/// store the returned string and compare plaintext against it later.
#[async_trait]
pub trait HashProvider: Send + Sync {
    /// Hash a plaintext credential
    ///
    /// # Returns
    /// * `Ok(String)` - Encoded hash suitable for storage
    /// * `Err(DomainError)` - Hashing failed
    async fn generate_hash(&self, payload: &str) -> Result<String, DomainError>;

    /// Check a plaintext credential against a stored hash
    ///
    /// # Returns
    /// * `Ok(true)` - The credential matches
    /// * `Ok(false)` - The credential does not match
    /// * `Err(DomainError)` - The stored hash could not be read
    async fn compare_hash(&self, payload: &str, hashed: &str) -> Result<bool, DomainError>;
}
