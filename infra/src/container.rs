//! Service container wiring repositories, providers and services

use std::sync::Arc;

use ag_core::providers::clock::SystemClock;
use ag_core::repositories::{
    InMemoryAppointmentRepository, InMemoryUserRepository, InMemoryUserTokenRepository,
};
use ag_core::services::{
    AppointmentServiceConfig, CreateAppointmentService, ResetPasswordService,
    ResetPasswordServiceConfig,
};
use ag_shared::config::AppConfig;

use crate::hash::BcryptHashProvider;

/// Password reset service as wired by the container
pub type AppResetPasswordService =
    ResetPasswordService<InMemoryUserRepository, InMemoryUserTokenRepository, BcryptHashProvider>;

/// Application service container
///
/// Each repository is created once and shared by every service that needs it.
pub struct AppServices {
    pub users: Arc<InMemoryUserRepository>,
    pub user_tokens: Arc<InMemoryUserTokenRepository>,
    pub appointments: Arc<InMemoryAppointmentRepository>,
    pub hash_provider: Arc<BcryptHashProvider>,
    pub create_appointment: CreateAppointmentService<InMemoryAppointmentRepository>,
    pub reset_password: AppResetPasswordService,
}

impl AppServices {
    /// Build the container from application configuration
    pub fn build(config: &AppConfig) -> Self {
        let clock = Arc::new(SystemClock);

        let users = Arc::new(InMemoryUserRepository::new());
        let user_tokens = Arc::new(InMemoryUserTokenRepository::with_clock(clock.clone()));
        let appointments = Arc::new(InMemoryAppointmentRepository::new());
        let hash_provider = Arc::new(BcryptHashProvider::new(&config.auth.password));

        let create_appointment = CreateAppointmentService::new(
            appointments.clone(),
            AppointmentServiceConfig::new(config.scheduling.clone()),
        );
        let reset_password = ResetPasswordService::with_clock(
            users.clone(),
            user_tokens.clone(),
            hash_provider.clone(),
            clock,
            ResetPasswordServiceConfig::new(config.auth.recovery.clone()),
        );

        tracing::debug!(
            bcrypt_cost = hash_provider.cost(),
            token_validity_minutes = config.auth.recovery.validity_minutes,
            "Application services wired"
        );

        Self {
            users,
            user_tokens,
            appointments,
            hash_provider,
            create_appointment,
            reset_password,
        }
    }
}
