//! User service for registration and lookups

use std::sync::Arc;

use tracing::info;

use crate::domain::user::{
    validate_email, validate_password, validate_phone, validate_username, NewUser, User, UserId,
    UserProfile, UserRepository,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Request for registering a new user
#[derive(Debug, Clone, Default)]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
    pub nickname: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// User service for registration and lookups
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService")
            .field("hasher", &self.hasher)
            .finish_non_exhaustive()
    }
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new active user
    pub async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        validate_username(&request.username).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&request.password).map_err(|e| DomainError::validation(e.to_string()))?;

        if request.nickname.trim().is_empty() {
            return Err(DomainError::validation("Nickname cannot be empty"));
        }

        let email = non_blank(request.email);
        let phone = non_blank(request.phone);

        if let Some(email) = &email {
            validate_email(email).map_err(|e| DomainError::validation(e.to_string()))?;
        }

        if let Some(phone) = &phone {
            validate_phone(phone).map_err(|e| DomainError::validation(e.to_string()))?;
        }

        if self.repository.get_by_username(&request.username).await?.is_some() {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                request.username
            )));
        }

        if let Some(email) = &email {
            if self.repository.get_by_email(email).await?.is_some() {
                return Err(DomainError::conflict("Email is already registered"));
            }
        }

        if let Some(phone) = &phone {
            if self.repository.get_by_phone(phone).await?.is_some() {
                return Err(DomainError::conflict("Phone number is already registered"));
            }
        }

        let password_hash = self.hasher.hash(&request.password)?;

        let user = self
            .repository
            .create(NewUser {
                username: request.username,
                password_hash,
                profile: UserProfile {
                    nickname: Some(request.nickname),
                    email,
                    phone,
                    avatar: None,
                },
            })
            .await?;

        info!(user_id = %user.id(), username = %user.username(), "User registered");

        Ok(user)
    }

    /// Get a user by ID
    pub async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        self.repository.get(id).await
    }

    /// Get a user by username
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.repository.get_by_username(username).await
    }

    /// Count registered users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::user::password::Argon2Hasher;
    use crate::infrastructure::user::repository::InMemoryUserRepository;

    fn create_service() -> UserService {
        UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(Argon2Hasher::new()),
        )
    }

    fn make_request(username: &str, password: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            username: username.to_string(),
            password: password.to_string(),
            nickname: "Nick".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_register_user() {
        let service = create_service();

        let user = service
            .register(RegisterUserRequest {
                email: Some("alice@example.com".to_string()),
                phone: Some(String::new()),
                ..make_request("alice", "Secret123")
            })
            .await
            .unwrap();

        assert_eq!(user.username(), "alice");
        assert!(user.is_active());
        assert_ne!(user.password_hash(), "Secret123");
        assert_eq!(user.profile().nickname.as_deref(), Some("Nick"));
        assert_eq!(user.profile().email.as_deref(), Some("alice@example.com"));
        assert!(user.profile().phone.is_none());

        let fetched = service.get(user.id()).await.unwrap();
        assert!(fetched.is_some());
    }

    #[tokio::test]
    async fn test_register_invalid_username() {
        let service = create_service();

        let result = service.register(make_request("ab", "Secret123")).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_register_weak_password() {
        let service = create_service();

        let result = service.register(make_request("alice", "password")).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_register_blank_nickname() {
        let service = create_service();

        let result = service
            .register(RegisterUserRequest {
                nickname: "  ".to_string(),
                ..make_request("alice", "Secret123")
            })
            .await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let service = create_service();

        service.register(make_request("alice", "Secret123")).await.unwrap();
        let result = service.register(make_request("alice", "Other456x")).await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = create_service();

        let with_email = |username: &str| RegisterUserRequest {
            email: Some("shared@example.com".to_string()),
            ..make_request(username, "Secret123")
        };

        service.register(with_email("alice")).await.unwrap();
        let result = service.register(with_email("bobby")).await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_registrations_share_one_email() {
        let service = create_service();

        let with_email = |username: &str| RegisterUserRequest {
            email: Some("race@example.com".to_string()),
            ..make_request(username, "Secret123")
        };

        let first = tokio::spawn({
            let service = service.clone();
            let request = with_email("first_user");
            async move { service.register(request).await }
        });
        let second = tokio::spawn({
            let service = service.clone();
            let request = with_email("second_user");
            async move { service.register(request).await }
        });

        let results = [first.await.unwrap(), second.await.unwrap()];

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .any(|r| matches!(r, Err(DomainError::Conflict { .. }))));
        assert_eq!(service.count().await.unwrap(), 1);
    }
}
