pub mod appointment;
pub mod user;
pub mod user_token;

pub use appointment::{AppointmentRepository, InMemoryAppointmentRepository};
pub use user::{InMemoryUserRepository, UserRepository};
pub use user_token::{InMemoryUserTokenRepository, UserTokenRepository};
