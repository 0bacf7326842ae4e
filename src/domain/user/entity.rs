//! User entity and related types

use serde::{Deserialize, Serialize};

/// Numeric user identifier, assigned by the user store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner numeric value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// User is active and can log in
    #[default]
    Active,
    /// User has been disabled by an operator
    Disabled,
}

impl UserStatus {
    /// Check if the user can log in
    pub fn can_login(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Optional profile fields shown back to the client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Stored credential record for a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    id: UserId,
    /// Username for login
    username: String,
    /// Argon2 password hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    /// Current status of the user
    status: UserStatus,
    #[serde(flatten)]
    profile: UserProfile,
}

impl User {
    /// Create a new active user
    pub fn new(id: UserId, username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password_hash: password_hash.into(),
            status: UserStatus::Active,
            profile: UserProfile::default(),
        }
    }

    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = profile;
        self
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Check if the user is active and can log in
    pub fn is_active(&self) -> bool {
        self.status.can_login()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(id: i64, username: &str) -> User {
        User::new(UserId::new(id), username, "hashed_password")
    }

    #[test]
    fn test_user_status() {
        assert!(UserStatus::Active.can_login());
        assert!(!UserStatus::Disabled.can_login());
    }

    #[test]
    fn test_user_creation() {
        let user = create_test_user(1, "alice");

        assert_eq!(user.id().value(), 1);
        assert_eq!(user.username(), "alice");
        assert_eq!(user.password_hash(), "hashed_password");
        assert!(user.is_active());
        assert_eq!(user.profile(), &UserProfile::default());
    }

    #[test]
    fn test_user_serialization_excludes_password() {
        let user = create_test_user(7, "alice").with_profile(UserProfile {
            nickname: Some("Alice".to_string()),
            ..Default::default()
        });

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("hashed_password"));
        assert!(!json.contains("password_hash"));
        assert!(json.contains("\"nickname\":\"Alice\""));
        assert!(json.contains("\"id\":7"));
    }

    #[test]
    fn test_status_deserialization() {
        let status: UserStatus = serde_json::from_str("\"disabled\"").unwrap();
        assert_eq!(status, UserStatus::Disabled);
    }
}
