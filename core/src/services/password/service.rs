//! Password reset service implementation

use std::sync::Arc;

use crate::errors::{DomainResult, ResetPasswordError, ValidationError};
use crate::providers::clock::{Clock, SystemClock};
use crate::providers::hash::HashProvider;
use crate::repositories::{UserRepository, UserTokenRepository};

use super::config::ResetPasswordServiceConfig;

/// Service that resets a user's password from a recovery token
pub struct ResetPasswordService<U, T, H, C = SystemClock>
where
    U: UserRepository,
    T: UserTokenRepository,
    H: HashProvider,
    C: Clock,
{
    /// User repository for loading and saving the account
    user_repository: Arc<U>,
    /// Token repository for recovery token lookup
    user_token_repository: Arc<T>,
    /// Hash provider for the new credential
    hash_provider: Arc<H>,
    /// Time source for the validity check
    clock: Arc<C>,
    /// Service configuration
    config: ResetPasswordServiceConfig,
}

impl<U, T, H> ResetPasswordService<U, T, H, SystemClock>
where
    U: UserRepository,
    T: UserTokenRepository,
    H: HashProvider,
{
    /// Create a new password reset service reading the system time
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user persistence
    /// * `user_token_repository` - Repository for recovery tokens
    /// * `hash_provider` - Provider hashing the new password
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        user_token_repository: Arc<T>,
        hash_provider: Arc<H>,
        config: ResetPasswordServiceConfig,
    ) -> Self {
        Self::with_clock(
            user_repository,
            user_token_repository,
            hash_provider,
            Arc::new(SystemClock),
            config,
        )
    }
}

impl<U, T, H, C> ResetPasswordService<U, T, H, C>
where
    U: UserRepository,
    T: UserTokenRepository,
    H: HashProvider,
    C: Clock,
{
    /// Create a new password reset service with an explicit clock
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user persistence
    /// * `user_token_repository` - Repository for recovery tokens
    /// * `hash_provider` - Provider hashing the new password
    /// * `clock` - Time source for the validity check
    /// * `config` - Service configuration
    pub fn with_clock(
        user_repository: Arc<U>,
        user_token_repository: Arc<T>,
        hash_provider: Arc<H>,
        clock: Arc<C>,
        config: ResetPasswordServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            user_token_repository,
            hash_provider,
            clock,
            config,
        }
    }

    /// Reset a password using a recovery token
    ///
    /// This method:
    /// 1. Looks up the recovery token
    /// 2. Looks up the user the token was issued for
    /// 3. Rejects tokens older than the validity window
    /// 4. Hashes the new password and saves the user
    /// 5. Deletes the token when single-use tokens are enabled
    ///
    /// Nothing is hashed or written unless steps 1-3 pass.
    ///
    /// # Arguments
    ///
    /// * `token` - Opaque recovery token value
    /// * `password` - New plaintext password
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Password replaced
    /// * `Err(DomainError)` - `NotFound` for an unknown token or user,
    ///   `Expired` for a stale token, `Validation` for blank input
    pub async fn execute(&self, token: &str, password: &str) -> DomainResult<()> {
        if token.is_empty() {
            return Err(ValidationError::required("token").into());
        }
        if password.is_empty() {
            return Err(ValidationError::required("password").into());
        }

        let user_token = match self.user_token_repository.find_by_token(token).await? {
            Some(user_token) => user_token,
            None => {
                tracing::warn!(
                    event = "reset_token_not_found",
                    "Password reset with unknown token"
                );
                return Err(ResetPasswordError::TokenNotFound.into());
            }
        };

        let mut user = match self.user_repository.find_by_id(user_token.user_id).await? {
            Some(user) => user,
            None => {
                tracing::warn!(
                    user_id = %user_token.user_id,
                    token_id = %user_token.id,
                    event = "reset_user_not_found",
                    "Password reset token points at a missing user"
                );
                return Err(ResetPasswordError::UserNotFound.into());
            }
        };

        let validity = self.config.validity()?;
        let now = self.clock.now();
        if user_token.is_expired_at(now, validity) {
            tracing::warn!(
                user_id = %user.id,
                token_id = %user_token.id,
                age_minutes = user_token.age_at(now).num_minutes(),
                event = "reset_token_expired",
                "Password reset token expired"
            );
            return Err(ResetPasswordError::TokenExpired.into());
        }

        let hashed_password = self.hash_provider.generate_hash(password).await?;
        user.set_password(hashed_password);
        let user = self.user_repository.save(user).await?;

        if self.config.single_use() {
            let removed = self.user_token_repository.delete(token).await?;
            tracing::debug!(
                token_id = %user_token.id,
                removed = removed,
                "Consumed password reset token"
            );
        }

        tracing::info!(
            user_id = %user.id,
            event = "password_reset",
            "Password reset completed"
        );

        Ok(())
    }
}
