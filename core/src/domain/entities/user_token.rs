//! Recovery token entity used to reset a user's password.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default validity window for recovery tokens (2 hours)
pub const DEFAULT_TOKEN_VALIDITY_MINUTES: i64 = 120;

/// Recovery token issued for a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserToken {
    /// Unique identifier for the token record
    pub id: Uuid,

    /// Opaque token value handed to the user
    pub token: String,

    /// User ID this token belongs to
    pub user_id: Uuid,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token was last updated
    pub updated_at: DateTime<Utc>,
}

impl UserToken {
    /// Creates a new recovery token for a user
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `created_at` - Issue time, taken from the caller's clock
    ///
    /// # Returns
    ///
    /// A new `UserToken` with a random opaque value
    pub fn new(user_id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            token: Uuid::new_v4().to_string(),
            user_id,
            created_at,
            updated_at: created_at,
        }
    }

    /// Time elapsed between token creation and `now`
    pub fn age_at(&self, now: DateTime<Utc>) -> Duration {
        now - self.created_at
    }

    /// Checks if the token is past its validity window at `now`
    ///
    /// A token aged exactly `validity` is still accepted.
    pub fn is_expired_at(&self, now: DateTime<Utc>, validity: Duration) -> bool {
        self.age_at(now) > validity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validity() -> Duration {
        Duration::minutes(DEFAULT_TOKEN_VALIDITY_MINUTES)
    }

    #[test]
    fn test_new_token_creation() {
        let user_id = Uuid::new_v4();
        let now = Utc::now();
        let token = UserToken::new(user_id, now);

        assert_eq!(token.user_id, user_id);
        assert_eq!(token.created_at, now);
        assert!(Uuid::parse_str(&token.token).is_ok());
    }

    #[test]
    fn test_token_values_are_unique() {
        let user_id = Uuid::new_v4();
        let now = Utc::now();

        let first = UserToken::new(user_id, now);
        let second = UserToken::new(user_id, now);

        assert_ne!(first.token, second.token);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_token_within_window() {
        let now = Utc::now();
        let token = UserToken::new(Uuid::new_v4(), now);

        assert!(!token.is_expired_at(now, validity()));
        assert!(!token.is_expired_at(now + Duration::minutes(119), validity()));
    }

    #[test]
    fn test_token_expiry_boundary() {
        let now = Utc::now();
        let token = UserToken::new(Uuid::new_v4(), now);

        assert!(!token.is_expired_at(now + Duration::hours(2), validity()));
        assert!(token.is_expired_at(
            now + Duration::hours(2) + Duration::milliseconds(1),
            validity()
        ));
    }

    #[test]
    fn test_token_age() {
        let now = Utc::now();
        let token = UserToken::new(Uuid::new_v4(), now);

        assert_eq!(token.age_at(now + Duration::hours(3)), Duration::hours(3));
    }
}
