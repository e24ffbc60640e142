//! Password recovery service module
//!
//! This module resets a user's password from a recovery token:
//! - Token and user lookup
//! - Validity window check against an injectable clock
//! - Rehashing and persisting the new credential
//! - Optional single-use token invalidation

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::ResetPasswordServiceConfig;
pub use service::ResetPasswordService;
