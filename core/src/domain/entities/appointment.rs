//! Appointment entity representing a booked slot with a provider.

use chrono::{DateTime, SubsecRound, Timelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Appointment entity representing a booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique identifier for the appointment
    pub id: Uuid,

    /// Identifier of the provider the appointment is booked against
    pub provider_id: String,

    /// Booked instant, held at minute precision
    pub date: DateTime<Utc>,

    /// Timestamp when the appointment was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the appointment was last updated
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Creates a new Appointment instance
    ///
    /// The date is truncated to the minute so that bookings made with
    /// second-level noise still collide on the same slot.
    pub fn new(provider_id: String, date: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            provider_id,
            date: truncate_to_minute(date),
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks if the appointment occupies the given slot
    pub fn is_at(&self, date: DateTime<Utc>) -> bool {
        self.date == truncate_to_minute(date)
    }

    /// Checks if the appointment belongs to the given provider
    pub fn is_for_provider(&self, provider_id: &str) -> bool {
        self.provider_id == provider_id
    }
}

/// Drops seconds and sub-second precision from a timestamp
pub fn truncate_to_minute(date: DateTime<Utc>) -> DateTime<Utc> {
    let trimmed = date.trunc_subsecs(0);
    trimmed.with_second(0).unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_appointment_creation() {
        let date = Utc.with_ymd_and_hms(2021, 5, 10, 11, 0, 0).unwrap();
        let appointment = Appointment::new("123456".to_string(), date);

        assert_eq!(appointment.provider_id, "123456");
        assert_eq!(appointment.date, date);
        assert_eq!(appointment.created_at, appointment.updated_at);
    }

    #[test]
    fn test_date_truncated_to_minute() {
        let date = Utc.with_ymd_and_hms(2021, 5, 10, 11, 0, 42).unwrap()
            + chrono::Duration::milliseconds(250);
        let appointment = Appointment::new("123456".to_string(), date);

        assert_eq!(appointment.date, Utc.with_ymd_and_hms(2021, 5, 10, 11, 0, 0).unwrap());
        assert!(appointment.is_at(date));
    }

    #[test]
    fn test_is_at_different_minute() {
        let date = Utc.with_ymd_and_hms(2021, 5, 10, 11, 0, 0).unwrap();
        let appointment = Appointment::new("123456".to_string(), date);

        assert!(!appointment.is_at(date + chrono::Duration::minutes(1)));
    }

    #[test]
    fn test_is_for_provider() {
        let appointment = Appointment::new("provider-a".to_string(), Utc::now());
        assert!(appointment.is_for_provider("provider-a"));
        assert!(!appointment.is_for_provider("provider-b"));
    }

    #[test]
    fn test_appointment_serialization() {
        let appointment = Appointment::new("123456".to_string(), Utc::now());

        let json = serde_json::to_string(&appointment).unwrap();
        let deserialized: Appointment = serde_json::from_str(&json).unwrap();

        assert_eq!(appointment, deserialized);
    }
}
