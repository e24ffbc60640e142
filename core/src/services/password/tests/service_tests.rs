//! Unit tests for password reset service

use std::sync::Arc;

use ag_shared::config::RecoveryTokenConfig;
use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, ErrorKind, ResetPasswordError, ValidationError};
use crate::providers::clock::ManualClock;
use crate::providers::hash::{FakeHashProvider, HashProvider};
use crate::repositories::{
    InMemoryUserRepository, InMemoryUserTokenRepository, UserRepository, UserTokenRepository,
};
use crate::services::password::{ResetPasswordService, ResetPasswordServiceConfig};

use super::mocks::SpyHashProvider;

type TestService<H> =
    ResetPasswordService<InMemoryUserRepository, InMemoryUserTokenRepository, H, ManualClock>;

struct Fixture<H: HashProvider> {
    users: Arc<InMemoryUserRepository>,
    tokens: Arc<InMemoryUserTokenRepository>,
    hash: Arc<H>,
    clock: Arc<ManualClock>,
    service: TestService<H>,
}

fn fixture_with<H: HashProvider>(hash: H, config: ResetPasswordServiceConfig) -> Fixture<H> {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2021, 5, 10, 9, 0, 0).unwrap(),
    ));
    let users = Arc::new(InMemoryUserRepository::new());
    let tokens = Arc::new(InMemoryUserTokenRepository::with_clock(clock.clone()));
    let hash = Arc::new(hash);
    let service = ResetPasswordService::with_clock(
        users.clone(),
        tokens.clone(),
        hash.clone(),
        clock.clone(),
        config,
    );

    Fixture {
        users,
        tokens,
        hash,
        clock,
        service,
    }
}

fn fixture() -> Fixture<SpyHashProvider> {
    fixture_with(SpyHashProvider::new(), ResetPasswordServiceConfig::default())
}

async fn create_john_doe(users: &InMemoryUserRepository) -> User {
    users
        .create(User::new(
            "John Doe".to_string(),
            "johndoe@test.com".to_string(),
            "123456".to_string(),
        ))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_reset_password_with_recovery_token() {
    let f = fixture();
    let user = create_john_doe(&f.users).await;
    let user_token = f.tokens.generate(user.id).await.unwrap();

    f.service
        .execute(&user_token.token, "novasenhaxxx")
        .await
        .unwrap();

    let updated = f.users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(f.hash.calls(), vec!["novasenhaxxx".to_string()]);
    assert_eq!(updated.password, "hashed:novasenhaxxx");
    assert_eq!(updated.name, "John Doe");
    assert_eq!(updated.email, "johndoe@test.com");
}

#[tokio::test]
async fn test_reset_password_with_fake_hash_stores_plain_value() {
    let f = fixture_with(FakeHashProvider::new(), ResetPasswordServiceConfig::default());
    let user = create_john_doe(&f.users).await;
    let user_token = f.tokens.generate(user.id).await.unwrap();

    f.service
        .execute(&user_token.token, "novasenhaxxx")
        .await
        .unwrap();

    let updated = f.users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(updated.password, "novasenhaxxx");
}

#[tokio::test]
async fn test_reset_password_with_invalid_token() {
    let f = fixture();
    create_john_doe(&f.users).await;

    let result = f.service.execute("not-valid-token", "novasenhaxxx").await;

    let err = result.unwrap_err();
    assert_eq!(err, DomainError::ResetPassword(ResetPasswordError::TokenNotFound));
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(f.hash.calls().is_empty());
}

#[tokio::test]
async fn test_reset_password_with_non_existing_user() {
    let f = fixture();
    let user_token = f.tokens.generate(Uuid::new_v4()).await.unwrap();

    let result = f.service.execute(&user_token.token, "novasenhaxxx").await;

    let err = result.unwrap_err();
    assert_eq!(err, DomainError::ResetPassword(ResetPasswordError::UserNotFound));
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(f.hash.calls().is_empty());
}

#[tokio::test]
async fn test_reset_password_after_two_hours() {
    let f = fixture();
    let user = create_john_doe(&f.users).await;
    let user_token = f.tokens.generate(user.id).await.unwrap();

    f.clock.advance(Duration::hours(3));
    let result = f.service.execute(&user_token.token, "novasenhaxxx").await;

    let err = result.unwrap_err();
    assert_eq!(err, DomainError::ResetPassword(ResetPasswordError::TokenExpired));
    assert_eq!(err.kind(), ErrorKind::Expired);

    let unchanged = f.users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(unchanged.password, "123456");
    assert!(f.hash.calls().is_empty());
}

#[tokio::test]
async fn test_reset_password_at_exactly_two_hours() {
    let f = fixture();
    let user = create_john_doe(&f.users).await;
    let user_token = f.tokens.generate(user.id).await.unwrap();

    f.clock.advance(Duration::hours(2));
    let result = f.service.execute(&user_token.token, "novasenhaxxx").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_reset_password_just_past_two_hours() {
    let f = fixture();
    let user = create_john_doe(&f.users).await;
    let user_token = f.tokens.generate(user.id).await.unwrap();

    f.clock.advance(Duration::hours(2) + Duration::seconds(1));
    let result = f.service.execute(&user_token.token, "novasenhaxxx").await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Expired);
}

#[tokio::test]
async fn test_missing_user_reported_before_expiry() {
    let f = fixture();
    let user_token = f.tokens.generate(Uuid::new_v4()).await.unwrap();

    f.clock.advance(Duration::hours(3));
    let result = f.service.execute(&user_token.token, "novasenhaxxx").await;

    assert_eq!(
        result.unwrap_err(),
        DomainError::ResetPassword(ResetPasswordError::UserNotFound)
    );
}

#[tokio::test]
async fn test_custom_validity_window() {
    let config = ResetPasswordServiceConfig::new(RecoveryTokenConfig {
        validity_minutes: 30,
        single_use: false,
    });
    let f = fixture_with(SpyHashProvider::new(), config);
    let user = create_john_doe(&f.users).await;
    let user_token = f.tokens.generate(user.id).await.unwrap();

    f.clock.advance(Duration::minutes(31));
    let result = f.service.execute(&user_token.token, "novasenhaxxx").await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Expired);
}

#[tokio::test]
async fn test_unrepresentable_validity_fails_without_panic() {
    let config = ResetPasswordServiceConfig::new(RecoveryTokenConfig {
        validity_minutes: i64::MAX / 2,
        single_use: false,
    });
    let f = fixture_with(SpyHashProvider::new(), config);
    let user = create_john_doe(&f.users).await;
    let user_token = f.tokens.generate(user.id).await.unwrap();

    let result = f.service.execute(&user_token.token, "novasenhaxxx").await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Internal);
    let unchanged = f.users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(unchanged.password, "123456");
    assert!(f.hash.calls().is_empty());
}

#[tokio::test]
async fn test_negative_validity_rejected_not_expired() {
    let config = ResetPasswordServiceConfig::new(RecoveryTokenConfig {
        validity_minutes: -1,
        single_use: false,
    });
    let f = fixture_with(SpyHashProvider::new(), config);
    let user = create_john_doe(&f.users).await;
    let user_token = f.tokens.generate(user.id).await.unwrap();

    let result = f.service.execute(&user_token.token, "novasenhaxxx").await;

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal);
    assert_ne!(err, DomainError::ResetPassword(ResetPasswordError::TokenExpired));
    assert!(f.hash.calls().is_empty());
}

#[test]
fn test_validity_conversion() {
    let default = ResetPasswordServiceConfig::default();
    assert_eq!(default.validity().unwrap(), Duration::hours(2));

    let huge = ResetPasswordServiceConfig::new(
        RecoveryTokenConfig::default().with_validity_hours(i64::MAX),
    );
    assert_eq!(huge.validity().unwrap_err().kind(), ErrorKind::Internal);
}

#[tokio::test]
async fn test_blank_input_rejected_before_lookup() {
    let f = fixture();
    let user = create_john_doe(&f.users).await;
    let user_token = f.tokens.generate(user.id).await.unwrap();

    let no_token = f.service.execute("", "novasenhaxxx").await;
    assert_eq!(
        no_token.unwrap_err(),
        DomainError::Validation(ValidationError::required("token"))
    );

    let no_password = f.service.execute(&user_token.token, "").await;
    assert_eq!(
        no_password.unwrap_err(),
        DomainError::Validation(ValidationError::required("password"))
    );

    assert!(f.hash.calls().is_empty());
}

#[tokio::test]
async fn test_token_reusable_by_default() {
    let f = fixture();
    let user = create_john_doe(&f.users).await;
    let user_token = f.tokens.generate(user.id).await.unwrap();

    f.service.execute(&user_token.token, "first").await.unwrap();
    f.service.execute(&user_token.token, "second").await.unwrap();

    let updated = f.users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(updated.password, "hashed:second");
    assert_eq!(f.tokens.len().await, 1);
}

#[tokio::test]
async fn test_single_use_token_consumed() {
    let config =
        ResetPasswordServiceConfig::new(RecoveryTokenConfig::default().with_single_use(true));
    let f = fixture_with(SpyHashProvider::new(), config);
    let user = create_john_doe(&f.users).await;
    let user_token = f.tokens.generate(user.id).await.unwrap();

    f.service.execute(&user_token.token, "first").await.unwrap();
    let second = f.service.execute(&user_token.token, "second").await;

    assert_eq!(
        second.unwrap_err(),
        DomainError::ResetPassword(ResetPasswordError::TokenNotFound)
    );
    let updated = f.users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(updated.password, "hashed:first");
    assert!(f.tokens.is_empty().await);
}

#[tokio::test]
async fn test_single_use_token_kept_on_failure() {
    let config =
        ResetPasswordServiceConfig::new(RecoveryTokenConfig::default().with_single_use(true));
    let f = fixture_with(SpyHashProvider::new(), config);
    let user = create_john_doe(&f.users).await;
    let user_token = f.tokens.generate(user.id).await.unwrap();

    f.clock.advance(Duration::hours(3));
    let _ = f.service.execute(&user_token.token, "novasenhaxxx").await;

    assert_eq!(f.tokens.len().await, 1);
}

#[tokio::test]
async fn test_hash_failure_leaves_password_unchanged() {
    let f = fixture_with(SpyHashProvider::failing(), ResetPasswordServiceConfig::default());
    let user = create_john_doe(&f.users).await;
    let user_token = f.tokens.generate(user.id).await.unwrap();

    let result = f.service.execute(&user_token.token, "novasenhaxxx").await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Internal);
    let unchanged = f.users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(unchanged.password, "123456");
}
