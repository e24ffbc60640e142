//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address, unique across users
    pub email: String,

    /// Hashed credential
    #[serde(skip_serializing, default)]
    pub password: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    ///
    /// `password` must already be hashed; the entity never sees plaintext.
    pub fn new(name: String, email: String, password: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the stored credential with a freshly hashed one
    pub fn set_password(&mut self, hashed_password: String) {
        self.password = hashed_password;
        self.updated_at = Utc::now();
    }
}
