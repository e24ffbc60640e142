//! Business services containing domain logic and use cases.

pub mod appointment;
pub mod password;

// Re-export commonly used types
pub use appointment::{AppointmentServiceConfig, CreateAppointmentService};
pub use password::{ResetPasswordService, ResetPasswordServiceConfig};
