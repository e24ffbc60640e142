//! bcrypt hash provider

use ag_core::errors::DomainError;
use ag_core::providers::hash::HashProvider;
use ag_shared::config::PasswordHashConfig;
use async_trait::async_trait;

/// Hash provider producing bcrypt digests
#[derive(Debug, Clone)]
pub struct BcryptHashProvider {
    cost: u32,
}

impl BcryptHashProvider {
    /// Create a provider from shared password settings
    pub fn new(config: &PasswordHashConfig) -> Self {
        Self::with_cost(config.bcrypt_cost)
    }

    /// Create a provider with an explicit work factor
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHashProvider {
    fn default() -> Self {
        Self::with_cost(::bcrypt::DEFAULT_COST)
    }
}

#[async_trait]
impl HashProvider for BcryptHashProvider {
    async fn generate_hash(&self, payload: &str) -> Result<String, DomainError> {
        let payload = payload.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || ::bcrypt::hash(payload, cost))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Hashing task failed: {}", e),
            })?
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing failed: {}", e),
            })
    }

    async fn compare_hash(&self, payload: &str, hashed: &str) -> Result<bool, DomainError> {
        let payload = payload.to_owned();
        let hashed = hashed.to_owned();

        tokio::task::spawn_blocking(move || ::bcrypt::verify(payload, &hashed))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Hashing task failed: {}", e),
            })?
            .map_err(|e| DomainError::Internal {
                message: format!("Password verification failed: {}", e),
            })
    }
}
