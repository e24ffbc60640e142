//! In-memory implementation of UserTokenRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user_token::UserToken;
use crate::errors::DomainError;
use crate::providers::clock::{Clock, SystemClock};

use super::trait_::UserTokenRepository;

/// Process-local recovery token store, keyed by token value
pub struct InMemoryUserTokenRepository {
    tokens: Arc<RwLock<HashMap<String, UserToken>>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryUserTokenRepository {
    /// Create a new repository stamping tokens with the system time
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a new repository stamping tokens with the given clock
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }

    /// Number of stored tokens
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// Whether the repository holds no tokens
    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl Default for InMemoryUserTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserTokenRepository for InMemoryUserTokenRepository {
    async fn generate(&self, user_id: Uuid) -> Result<UserToken, DomainError> {
        let user_token = UserToken::new(user_id, self.clock.now());

        let mut tokens = self.tokens.write().await;
        tokens.insert(user_token.token.clone(), user_token.clone());

        Ok(user_token)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<UserToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token).cloned())
    }

    async fn delete(&self, token: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;
        Ok(tokens.remove(token).is_some())
    }
}
