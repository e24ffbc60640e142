//! Password hashing and account recovery configuration

use serde::{Deserialize, Serialize};

/// Largest validity window a `chrono::Duration` can represent, in minutes
pub const MAX_VALIDITY_MINUTES: i64 = i64::MAX / 60_000;

/// Authentication configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Password hashing settings
    #[serde(default)]
    pub password: PasswordHashConfig,

    /// Recovery token settings
    #[serde(default)]
    pub recovery: RecoveryTokenConfig,
}

impl AuthConfig {
    /// Auth settings for local development (cheap hashing)
    pub fn development() -> Self {
        Self {
            password: PasswordHashConfig { bcrypt_cost: 4 },
            recovery: RecoveryTokenConfig::default(),
        }
    }

    /// Check hashing and recovery settings
    pub fn validate(&self) -> Result<(), String> {
        self.password.validate()?;
        self.recovery.validate()
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PasswordHashConfig {
    /// bcrypt work factor (4..=31)
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl PasswordHashConfig {
    /// Check the work factor is one bcrypt accepts
    pub fn validate(&self) -> Result<(), String> {
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(format!(
                "auth.password.bcrypt_cost must be between 4 and 31, got {}",
                self.bcrypt_cost
            ));
        }
        Ok(())
    }
}

impl Default for PasswordHashConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

/// Password recovery token configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecoveryTokenConfig {
    /// Minutes a recovery token stays valid after it was generated
    #[serde(default = "default_validity_minutes")]
    pub validity_minutes: i64,

    /// Delete the token once it has been used for a successful reset
    #[serde(default)]
    pub single_use: bool,
}

impl Default for RecoveryTokenConfig {
    fn default() -> Self {
        Self {
            validity_minutes: default_validity_minutes(),
            single_use: false,
        }
    }
}

impl RecoveryTokenConfig {
    /// Set the validity window in hours
    pub fn with_validity_hours(mut self, hours: i64) -> Self {
        self.validity_minutes = hours.saturating_mul(60);
        self
    }

    /// Check the validity window is positive and representable
    pub fn validate(&self) -> Result<(), String> {
        if self.validity_minutes <= 0 || self.validity_minutes > MAX_VALIDITY_MINUTES {
            return Err(format!(
                "auth.recovery.validity_minutes must be between 1 and {}, got {}",
                MAX_VALIDITY_MINUTES, self.validity_minutes
            ));
        }
        Ok(())
    }

    /// Enable or disable single-use tokens
    pub fn with_single_use(mut self, single_use: bool) -> Self {
        self.single_use = single_use;
        self
    }
}

fn default_bcrypt_cost() -> u32 {
    12
}

fn default_validity_minutes() -> i64 {
    120 // 2 hours
}
