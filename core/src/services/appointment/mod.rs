//! Appointment booking service module
//!
//! Books appointments against a provider while refusing double-bookings.
//! The booking key (date alone, or date and provider) comes from
//! [`AppointmentServiceConfig`].

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AppointmentServiceConfig;
pub use service::CreateAppointmentService;
