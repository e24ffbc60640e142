//! Appointment creation service implementation

use ag_shared::config::BookingUniqueness;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::entities::appointment::{truncate_to_minute, Appointment};
use crate::errors::{AppointmentError, DomainResult, ErrorKind, ValidationError};
use crate::repositories::AppointmentRepository;

use super::config::AppointmentServiceConfig;

/// Service that books appointments without double-booking a slot
pub struct CreateAppointmentService<A>
where
    A: AppointmentRepository,
{
    /// Repository for appointment storage
    appointment_repository: Arc<A>,
    /// Service configuration
    config: AppointmentServiceConfig,
}

impl<A> CreateAppointmentService<A>
where
    A: AppointmentRepository,
{
    /// Create a new appointment service
    ///
    /// # Arguments
    ///
    /// * `appointment_repository` - Repository for appointment persistence
    /// * `config` - Service configuration
    pub fn new(appointment_repository: Arc<A>, config: AppointmentServiceConfig) -> Self {
        Self {
            appointment_repository,
            config,
        }
    }

    /// Book an appointment with a provider
    ///
    /// This method:
    /// 1. Rejects a blank provider id
    /// 2. Normalizes the date to minute precision
    /// 3. Looks for an appointment already holding the slot
    /// 4. Stores the new appointment
    ///
    /// # Arguments
    ///
    /// * `date` - Requested instant
    /// * `provider_id` - Provider to book against
    ///
    /// # Returns
    ///
    /// * `Ok(Appointment)` - The booked appointment
    /// * `Err(DomainError)` - `Validation` for a blank provider, `Conflict` when
    ///   the slot is taken (including when another booking wins the race
    ///   between the lookup and the insert)
    pub async fn execute(
        &self,
        date: DateTime<Utc>,
        provider_id: &str,
    ) -> DomainResult<Appointment> {
        if provider_id.trim().is_empty() {
            return Err(ValidationError::required("provider_id").into());
        }

        let appointment_date = truncate_to_minute(date);
        let uniqueness = self.config.uniqueness();

        let existing = match uniqueness {
            BookingUniqueness::Date => {
                self.appointment_repository
                    .find_by_date(appointment_date)
                    .await?
            }
            BookingUniqueness::ProviderDate => {
                self.appointment_repository
                    .find_by_date_and_provider(appointment_date, provider_id)
                    .await?
            }
        };

        if let Some(existing) = existing {
            tracing::warn!(
                provider_id = provider_id,
                date = %appointment_date,
                existing_id = %existing.id,
                event = "appointment_conflict",
                "Appointment date already booked"
            );
            return Err(AppointmentError::DateAlreadyBooked {
                date: appointment_date,
            }
            .into());
        }

        let appointment = self
            .appointment_repository
            .create(provider_id, appointment_date, uniqueness)
            .await
            .map_err(|e| {
                if e.kind() == ErrorKind::Conflict {
                    tracing::warn!(
                        provider_id = provider_id,
                        date = %appointment_date,
                        event = "appointment_conflict",
                        "Appointment date booked concurrently"
                    );
                }
                e
            })?;

        tracing::info!(
            appointment_id = %appointment.id,
            provider_id = provider_id,
            date = %appointment.date,
            event = "appointment_created",
            "Created appointment"
        );

        Ok(appointment)
    }
}
