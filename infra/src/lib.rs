//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Agenda backend,
//! following Clean Architecture principles. It provides the concrete pieces
//! the core crate only describes through traits.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Hash**: bcrypt implementation of the core `HashProvider`
//! - **Config**: `.env` + environment variable loading on top of shared defaults
//! - **Logging**: `tracing-subscriber` setup driven by `LoggingConfig`
//! - **Container**: wiring of repositories, providers and services

// Re-export core types for convenience
pub use ag_core::errors::*;

/// Password hashing module - bcrypt provider
pub mod hash;

/// Configuration loading
pub mod config;

/// Tracing subscriber setup
pub mod logging;

/// Service container
pub mod container;

pub use container::AppServices;
pub use hash::BcryptHashProvider;

/// Initialize the application services
///
/// This function:
/// - Loads configuration from `.env` and the process environment
/// - Installs the tracing subscriber
/// - Wires repositories, providers and services
pub fn initialize() -> Result<AppServices, InfrastructureError> {
    let config = config::load_config()?;
    logging::init_tracing(&config.logging)?;

    tracing::info!(
        environment = %config.environment,
        event = "infrastructure_init",
        "Initializing infrastructure services..."
    );

    let services = AppServices::build(&config);

    tracing::info!("Infrastructure services initialized successfully");

    Ok(services)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// A setting loaded but is outside its allowed range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Logging setup error
    #[error("Logging error: {0}")]
    Logging(String),
}
