//! Configuration for the appointment booking service

use ag_shared::config::scheduling::{BookingUniqueness, SchedulingConfig};

/// Configuration for the appointment booking service
#[derive(Debug, Clone, Default)]
pub struct AppointmentServiceConfig {
    /// Scheduling rules
    pub scheduling: SchedulingConfig,
}

impl AppointmentServiceConfig {
    /// Build the service config from shared scheduling settings
    pub fn new(scheduling: SchedulingConfig) -> Self {
        Self { scheduling }
    }

    /// Booking key used for conflict detection
    pub fn uniqueness(&self) -> BookingUniqueness {
        self.scheduling.uniqueness
    }
}
