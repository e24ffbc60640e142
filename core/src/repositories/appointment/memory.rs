//! In-memory implementation of AppointmentRepository

use ag_shared::config::BookingUniqueness;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::appointment::Appointment;
use crate::errors::{AppointmentError, DomainError};

use super::trait_::AppointmentRepository;

/// Process-local appointment store
pub struct InMemoryAppointmentRepository {
    appointments: Arc<RwLock<Vec<Appointment>>>,
}

impl InMemoryAppointmentRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            appointments: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of stored appointments
    pub async fn len(&self) -> usize {
        self.appointments.read().await.len()
    }

    /// Whether the repository holds no appointments
    pub async fn is_empty(&self) -> bool {
        self.appointments.read().await.is_empty()
    }

    fn collides(
        existing: &Appointment,
        candidate: &Appointment,
        uniqueness: BookingUniqueness,
    ) -> bool {
        match uniqueness {
            BookingUniqueness::Date => existing.date == candidate.date,
            BookingUniqueness::ProviderDate => {
                existing.date == candidate.date && existing.provider_id == candidate.provider_id
            }
        }
    }
}

impl Default for InMemoryAppointmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn find_by_date(&self, date: DateTime<Utc>) -> Result<Option<Appointment>, DomainError> {
        let appointments = self.appointments.read().await;
        Ok(appointments.iter().find(|a| a.is_at(date)).cloned())
    }

    async fn find_by_date_and_provider(
        &self,
        date: DateTime<Utc>,
        provider_id: &str,
    ) -> Result<Option<Appointment>, DomainError> {
        let appointments = self.appointments.read().await;
        Ok(appointments
            .iter()
            .find(|a| a.is_at(date) && a.is_for_provider(provider_id))
            .cloned())
    }

    async fn find_all_by_provider(
        &self,
        provider_id: &str,
    ) -> Result<Vec<Appointment>, DomainError> {
        let appointments = self.appointments.read().await;
        let mut found: Vec<Appointment> = appointments
            .iter()
            .filter(|a| a.is_for_provider(provider_id))
            .cloned()
            .collect();
        found.sort_by_key(|a| a.date);
        Ok(found)
    }

    async fn create(
        &self,
        provider_id: &str,
        date: DateTime<Utc>,
        uniqueness: BookingUniqueness,
    ) -> Result<Appointment, DomainError> {
        let appointment = Appointment::new(provider_id.to_string(), date);

        let mut appointments = self.appointments.write().await;

        // Re-check under the write lock; a concurrent booking may have landed
        let taken = appointments
            .iter()
            .any(|a| Self::collides(a, &appointment, uniqueness));
        if taken {
            return Err(AppointmentError::DateAlreadyBooked {
                date: appointment.date,
            }
            .into());
        }

        appointments.push(appointment.clone());
        Ok(appointment)
    }
}
