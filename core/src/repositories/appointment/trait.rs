//! Appointment repository trait defining the interface for booking persistence.

use ag_shared::config::BookingUniqueness;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::appointment::Appointment;
use crate::errors::DomainError;

/// Repository trait for Appointment entity persistence operations
///
/// Dates passed in are compared at minute precision, the same precision
/// `Appointment::new` stores.
///
/// # Concurrency
/// `create` must be an atomic conditional insert: if an appointment colliding
/// under the given booking key was stored between the caller's lookup and the
/// insert, it fails with `AppointmentError::DateAlreadyBooked` instead of
/// storing a duplicate.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Find an appointment booked at the given instant, for any provider
    ///
    /// # Returns
    /// * `Ok(Some(Appointment))` - The slot is taken
    /// * `Ok(None)` - The slot is free
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_date(&self, date: DateTime<Utc>) -> Result<Option<Appointment>, DomainError>;

    /// Find an appointment booked at the given instant with one provider
    async fn find_by_date_and_provider(
        &self,
        date: DateTime<Utc>,
        provider_id: &str,
    ) -> Result<Option<Appointment>, DomainError>;

    /// List a provider's appointments ordered by date
    async fn find_all_by_provider(&self, provider_id: &str)
        -> Result<Vec<Appointment>, DomainError>;

    /// Book a new appointment
    ///
    /// # Arguments
    /// * `provider_id` - Provider the appointment is booked against
    /// * `date` - Booked instant
    /// * `uniqueness` - Booking key the insert must not collide on
    ///
    /// # Returns
    /// * `Ok(Appointment)` - The stored appointment
    /// * `Err(DomainError)` - The slot was taken concurrently, or storage failed
    ///
    /// # Example
    /// ```no_run
    /// # use ag_shared::config::BookingUniqueness;
    /// # use chrono::{TimeZone, Utc};
    /// # use ag_core::repositories::AppointmentRepository;
    /// # async fn example(repo: &impl AppointmentRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let date = Utc.with_ymd_and_hms(2021, 5, 10, 11, 0, 0).unwrap();
    ///
    /// let appointment = repo.create("123456", date, BookingUniqueness::Date).await?;
    /// println!("Booked appointment {}", appointment.id);
    /// # Ok(())
    /// # }
    /// ```
    async fn create(
        &self,
        provider_id: &str,
        date: DateTime<Utc>,
        uniqueness: BookingUniqueness,
    ) -> Result<Appointment, DomainError>;
}
