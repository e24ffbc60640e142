//! Domain-specific error types and error handling.

mod types;


// Re-export all error types and utilities
pub use types::{AppointmentError, ErrorKind, ResetPasswordError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Appointment(#[from] AppointmentError),

    #[error(transparent)]
    ResetPassword(#[from] ResetPasswordError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DomainError {
    /// Classifies the error so calling layers can map it to a response
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::Appointment(err) => err.kind(),
            DomainError::ResetPassword(err) => err.kind(),
            DomainError::Validation(err) => err.kind(),
        }
    }

    /// Stable machine-readable code for the error
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
            DomainError::Appointment(err) => err.code(),
            DomainError::ResetPassword(err) => err.code(),
            DomainError::Validation(err) => err.code(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
