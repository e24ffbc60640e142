//! Domain entities representing core business objects.

pub mod appointment;
pub mod user;
pub mod user_token;

// Re-export commonly used types
pub use appointment::{truncate_to_minute, Appointment};
pub use user::User;
pub use user_token::{UserToken, DEFAULT_TOKEN_VALIDITY_MINUTES};
