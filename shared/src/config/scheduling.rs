//! Appointment scheduling configuration

use serde::{Deserialize, Serialize};

/// Which fields make two appointments collide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingUniqueness {
    /// One appointment per instant across all providers
    #[default]
    Date,
    /// One appointment per instant for each provider
    ProviderDate,
}

/// Scheduling configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct SchedulingConfig {
    /// Booking key used for double-booking detection
    #[serde(default)]
    pub uniqueness: BookingUniqueness,
}

impl SchedulingConfig {
    /// Scheduling rules keyed per provider
    pub fn per_provider() -> Self {
        Self {
            uniqueness: BookingUniqueness::ProviderDate,
        }
    }
}
