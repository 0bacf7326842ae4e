//! User repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{User, UserId, UserProfile};
use crate::domain::DomainError;

/// Data needed to store a new user; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub profile: UserProfile,
}

/// Repository trait for user storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get a user by their ID
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Get a user by their username (for login)
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Find a user owning the given email address
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user owning the given phone number
    async fn get_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError>;

    /// Create a new active user and return the stored record
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Count stored users
    async fn count(&self) -> Result<usize, DomainError>;
}
