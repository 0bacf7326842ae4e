//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<UserId, User>,
    /// Index for username -> user ID lookup
    username_index: HashMap<String, UserId>,
    next_id: i64,
}

/// In-memory implementation of UserRepository
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Create a repository with initial users; new ids continue after the
    /// highest seeded id
    pub fn with_users(users: Vec<User>) -> Self {
        let mut inner = Inner {
            next_id: 1,
            ..Default::default()
        };

        for user in users {
            inner.next_id = inner.next_id.max(user.id().value().saturating_add(1));
            inner
                .username_index
                .insert(user.username().to_string(), user.id());
            inner.users.insert(user.id(), user);
        }

        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let inner = self.inner.read().await;

        Ok(inner
            .username_index
            .get(username)
            .and_then(|id| inner.users.get(id))
            .cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let inner = self.inner.read().await;

        Ok(inner
            .users
            .values()
            .find(|u| u.profile().email.as_deref() == Some(email))
            .cloned())
    }

    async fn get_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        let inner = self.inner.read().await;

        Ok(inner
            .users
            .values()
            .find(|u| u.profile().phone.as_deref() == Some(phone))
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let mut inner = self.inner.write().await;

        if inner.username_index.contains_key(&new_user.username) {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                new_user.username
            )));
        }

        // Checked under the write lock so concurrent registrations cannot
        // both claim the same contact
        let profile = &new_user.profile;
        for user in inner.users.values() {
            if profile.email.is_some() && user.profile().email == profile.email {
                return Err(DomainError::conflict("Email is already registered"));
            }
            if profile.phone.is_some() && user.profile().phone == profile.phone {
                return Err(DomainError::conflict("Phone number is already registered"));
            }
        }

        let id = UserId::new(inner.next_id);
        if inner.users.contains_key(&id) {
            return Err(DomainError::storage("User id space exhausted"));
        }
        inner.next_id = inner.next_id.saturating_add(1);

        let user = User::new(id, &new_user.username, new_user.password_hash)
            .with_profile(new_user.profile);

        inner.username_index.insert(new_user.username, id);
        inner.users.insert(id, user.clone());

        Ok(user)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.inner.read().await.users.len())
    }
}
