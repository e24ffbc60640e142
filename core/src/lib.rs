//! # Agenda Core
//!
//! Core business logic and domain layer for the Agenda backend.
//! This crate contains domain entities, business services, repository interfaces,
//! provider interfaces (hashing, time) and error types that form the foundation
//! of the application architecture.

pub mod domain;
pub mod errors;
pub mod providers;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Appointment, User, UserToken};
pub use errors::{
    AppointmentError, DomainError, DomainResult, ErrorKind, ResetPasswordError, ValidationError,
};
pub use providers::{Clock, HashProvider, ManualClock, SystemClock};
pub use repositories::{AppointmentRepository, UserRepository, UserTokenRepository};
pub use services::{
    AppointmentServiceConfig, CreateAppointmentService, ResetPasswordService,
    ResetPasswordServiceConfig,
};
