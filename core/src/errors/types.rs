//! Domain-specific error types for booking and account recovery
//!
//! Each error enum carries its own reason; `ErrorKind` groups reasons into the
//! categories calling layers map to responses. Message wording for end users
//! is configured in the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error category shared by every domain error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Input failed a typed-value constraint
    Validation,
    /// Creation would violate a uniqueness invariant
    Conflict,
    /// A referenced record does not exist
    NotFound,
    /// A time-limited credential is past its window
    Expired,
    /// Collaborator or infrastructure failure
    Internal,
}

impl ErrorKind {
    /// Stable code for the category
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION",
            ErrorKind::Conflict => "CONFLICT",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Expired => "EXPIRED",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Appointment creation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppointmentError {
    #[error("This appointment date is already booked: {date}")]
    DateAlreadyBooked { date: DateTime<Utc> },
}

impl AppointmentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppointmentError::DateAlreadyBooked { .. } => ErrorKind::Conflict,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppointmentError::DateAlreadyBooked { .. } => "APPOINTMENT_DATE_ALREADY_BOOKED",
        }
    }
}

/// Password reset errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResetPasswordError {
    #[error("User token does not exist")]
    TokenNotFound,

    #[error("User does not exist")]
    UserNotFound,

    #[error("Token expired")]
    TokenExpired,
}

impl ResetPasswordError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResetPasswordError::TokenNotFound | ResetPasswordError::UserNotFound => {
                ErrorKind::NotFound
            }
            ResetPasswordError::TokenExpired => ErrorKind::Expired,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ResetPasswordError::TokenNotFound => "RESET_TOKEN_NOT_FOUND",
            ResetPasswordError::UserNotFound => "RESET_USER_NOT_FOUND",
            ResetPasswordError::TokenExpired => "RESET_TOKEN_EXPIRED",
        }
    }
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Email address already in use: {email}")]
    EmailAlreadyInUse { email: String },
}

impl ValidationError {
    /// Shorthand for a missing or blank field
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::RequiredField {
            field: field.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::RequiredField { .. } => ErrorKind::Validation,
            ValidationError::EmailAlreadyInUse { .. } => ErrorKind::Conflict,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::RequiredField { .. } => "REQUIRED_FIELD",
            ValidationError::EmailAlreadyInUse { .. } => "EMAIL_ALREADY_IN_USE",
        }
    }
}
