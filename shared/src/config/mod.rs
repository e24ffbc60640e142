//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Password hashing and account recovery configuration
//! - `environment` - Environment detection and logging configuration
//! - `scheduling` - Appointment booking rules

pub mod auth;
pub mod environment;
pub mod scheduling;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, PasswordHashConfig, RecoveryTokenConfig, MAX_VALIDITY_MINUTES};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use scheduling::{BookingUniqueness, SchedulingConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Scheduling configuration
    #[serde(default)]
    pub scheduling: SchedulingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            auth: AuthConfig::development(),
            scheduling: SchedulingConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            auth: AuthConfig::default(),
            scheduling: SchedulingConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Create the default configuration for the given environment
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::production();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        }
    }

    /// Load configuration defaults from environment
    pub fn from_env() -> Self {
        Self::for_environment(Environment::from_env())
    }

    /// Check settings whose range serde cannot express
    pub fn validate(&self) -> Result<(), String> {
        self.auth.validate()
    }
}
