//! User token repository trait defining the interface for recovery token storage.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user_token::UserToken;
use crate::errors::DomainError;

/// Repository trait for password recovery tokens
///
/// This trait defines the contract for issuing and looking up recovery tokens.
/// Expiry is not enforced here; the reset flow compares `created_at` against
/// its own clock.
///
/// # Security Considerations
/// - Token values must be unguessable
/// - A token resolves to exactly one user
#[async_trait]
pub trait UserTokenRepository: Send + Sync {
    /// Issue a new recovery token for a user
    ///
    /// The user is not required to exist; callers that need that guarantee
    /// look the user up themselves.
    ///
    /// # Arguments
    /// * `user_id` - The UUID of the user the token is issued for
    ///
    /// # Returns
    /// * `Ok(UserToken)` - The stored token
    /// * `Err(DomainError)` - Storage failed
    ///
    /// # Example
    /// ```no_run
    /// # use uuid::Uuid;
    /// # use ag_core::repositories::UserTokenRepository;
    /// # async fn example(repo: &impl UserTokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let user_id = Uuid::new_v4();
    /// let user_token = repo.generate(user_id).await?;
    /// println!("Send {} to the user", user_token.token);
    /// # Ok(())
    /// # }
    /// ```
    async fn generate(&self, user_id: Uuid) -> Result<UserToken, DomainError>;

    /// Find a token by its opaque value
    ///
    /// # Returns
    /// * `Ok(Some(UserToken))` - Token found
    /// * `Ok(None)` - No token with this value
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_token(&self, token: &str) -> Result<Option<UserToken>, DomainError>;

    /// Remove a token so it can no longer be used
    ///
    /// # Returns
    /// * `Ok(true)` - Token was removed
    /// * `Ok(false)` - Token not found
    /// * `Err(DomainError)` - Removal failed
    async fn delete(&self, token: &str) -> Result<bool, DomainError>;
}
