//! Configuration management for infrastructure services
//!
//! Settings are layered, lowest precedence first:
//! - Per-environment defaults from `AppConfig::for_environment`
//! - Variables from a `.env` file, if present
//! - Process environment variables prefixed with `APP__`, nested with `__`
//!   (e.g. `APP__AUTH__RECOVERY__SINGLE_USE=true`)

use ag_shared::config::{AppConfig, Environment};

use crate::InfrastructureError;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "APP";

/// Separator between nested keys in environment variable names
pub const ENV_SEPARATOR: &str = "__";

/// Load the application configuration for the detected environment
pub fn load_config() -> Result<AppConfig, InfrastructureError> {
    dotenvy::dotenv().ok(); // Load .env file if present

    load_config_for(Environment::from_env())
}

/// Load the application configuration on top of the given environment's defaults
pub fn load_config_for(environment: Environment) -> Result<AppConfig, InfrastructureError> {
    let defaults = AppConfig::for_environment(environment);

    let settings = ::config::Config::builder()
        .add_source(::config::Config::try_from(&defaults)?)
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    config.validate().map_err(InfrastructureError::InvalidConfig)?;

    tracing::debug!(
        environment = %config.environment,
        uniqueness = ?config.scheduling.uniqueness,
        single_use_tokens = config.auth.recovery.single_use,
        "Configuration loaded"
    );

    Ok(config)
}
