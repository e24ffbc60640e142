//! Configuration for the password reset service

use ag_shared::config::auth::RecoveryTokenConfig;
use chrono::Duration;

use crate::errors::{DomainError, DomainResult};

/// Configuration for the password reset service
#[derive(Debug, Clone, Default)]
pub struct ResetPasswordServiceConfig {
    /// Recovery token settings
    pub recovery: RecoveryTokenConfig,
}

impl ResetPasswordServiceConfig {
    /// Build the service config from shared recovery settings
    pub fn new(recovery: RecoveryTokenConfig) -> Self {
        Self { recovery }
    }

    /// How long a token stays usable after it was generated
    ///
    /// Fails with `Internal` when the configured window is not positive or
    /// does not fit a `Duration`.
    pub fn validity(&self) -> DomainResult<Duration> {
        self.recovery.validate().map_err(|message| DomainError::Internal { message })?;

        Duration::try_minutes(self.recovery.validity_minutes).ok_or_else(|| {
            DomainError::Internal {
                message: format!(
                    "Recovery token validity out of range: {} minutes",
                    self.recovery.validity_minutes
                ),
            }
        })
    }

    /// Whether a token is deleted after a successful reset
    pub fn single_use(&self) -> bool {
        self.recovery.single_use
    }
}
