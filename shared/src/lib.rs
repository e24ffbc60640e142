//! Shared configuration types for the Agenda server
//!
//! This crate provides the configuration used across all server modules:
//! - Environment detection and logging settings
//! - Password hashing and recovery token settings
//! - Appointment scheduling rules

pub mod config;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, BookingUniqueness, Environment, LogFormat, LoggingConfig,
    PasswordHashConfig, RecoveryTokenConfig, SchedulingConfig,
};
