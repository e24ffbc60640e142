//! Identity hash provider for tests and local wiring

use async_trait::async_trait;

use crate::errors::DomainError;

use super::trait_::HashProvider;

/// Hash provider that stores credentials unchanged
pub struct FakeHashProvider;

impl FakeHashProvider {
    /// Create a new fake provider
    pub fn new() -> Self {
        Self
    }
}

impl Default for FakeHashProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HashProvider for FakeHashProvider {
    async fn generate_hash(&self, payload: &str) -> Result<String, DomainError> {
        Ok(payload.to_string())
    }

    async fn compare_hash(&self, payload: &str, hashed: &str) -> Result<bool, DomainError> {
        Ok(payload == hashed)
    }
}
