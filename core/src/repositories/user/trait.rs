//! User repository trait defining the interface for user data persistence.
//!
//! This module defines the repository pattern interface for User entities,
//! following Domain-Driven Design principles. The trait is async-first and
//! uses Result types for proper error handling.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// This trait defines the contract for data access operations related to users.
/// Implementations of this trait should handle the actual storage operations
/// while maintaining the abstraction boundary between domain and infrastructure layers.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use ag_core::repositories::UserRepository;
/// use ag_core::domain::entities::user::User;
/// use ag_core::errors::DomainError;
///
/// struct PostgresUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for PostgresUserRepository {
///     async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
///         Ok(None)
///     }
///
///     async fn create(&self, user: User) -> Result<User, DomainError> {
///         Ok(user)
///     }
///
///     async fn save(&self, user: User) -> Result<User, DomainError> {
///         Ok(user)
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the user
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Storage or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by email address
    ///
    /// # Arguments
    /// * `email` - The email address, compared exactly
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with this email
    /// * `Err(DomainError)` - Storage or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user in the repository
    ///
    /// # Arguments
    /// * `user` - The User entity to persist, password already hashed
    ///
    /// # Returns
    /// * `Ok(User)` - The created user with any storage-generated fields
    /// * `Err(DomainError)` - Creation failed (e.g., duplicate email)
    ///
    /// # Example
    /// ```no_run
    /// # use ag_core::repositories::UserRepository;
    /// # use ag_core::domain::entities::user::User;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let new_user = User::new(
    ///     "John Doe".to_string(),
    ///     "johndoe@test.com".to_string(),
    ///     "hashed_password".to_string(),
    /// );
    ///
    /// let created_user = repo.create(new_user).await?;
    /// println!("Created user with ID: {}", created_user.id);
    /// # Ok(())
    /// # }
    /// ```
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Persist changes to an existing user
    ///
    /// # Arguments
    /// * `user` - The User entity with updated fields
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError)` - Save failed (e.g., user not found)
    async fn save(&self, user: User) -> Result<User, DomainError>;
}
