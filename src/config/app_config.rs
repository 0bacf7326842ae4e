use std::collections::HashSet;

use serde::Deserialize;

use crate::domain::user::{User, UserId, UserProfile, UserStatus};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub jwt: JwtSettings,
    pub access: AccessSettings,
    /// Users loaded into the in-memory store at startup
    pub users: Vec<SeedUser>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Token signing settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct JwtSettings {
    /// HMAC-SHA-512 secret, at least 32 bytes
    pub secret: String,
    /// Token lifetime in milliseconds
    pub expiration_ms: i64,
}

impl std::fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &"[hidden]")
            .field("expiration_ms", &self.expiration_ms)
            .finish()
    }
}

/// Public route patterns; a trailing `/**` marks a prefix
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccessSettings {
    pub public_paths: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    pub id: i64,
    pub username: String,
    /// Argon2 PHC string, see the `hash-password` command
    pub password_hash: String,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(flatten)]
    pub profile: UserProfile,
}

impl From<SeedUser> for User {
    fn from(seed: SeedUser) -> Self {
        User::new(UserId::new(seed.id), seed.username, seed.password_hash)
            .with_status(seed.status)
            .with_profile(seed.profile)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for JwtSettings {
    fn default() -> Self {
        Self {
            secret: "test-ai-platform-secret-key-2026-must-be-at-least-32-characters".to_string(),
            expiration_ms: 86_400_000,
        }
    }
}

impl Default for AccessSettings {
    fn default() -> Self {
        Self {
            public_paths: vec![
                "/auth/login".to_string(),
                "/auth/register".to_string(),
                "/health".to_string(),
                "/live".to_string(),
            ],
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Reject settings that would only fail later, at request time
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.jwt.expiration_ms <= 0 {
            return Err(config::ConfigError::Message(format!(
                "jwt.expiration_ms must be positive, got {}",
                self.jwt.expiration_ms
            )));
        }

        let mut ids = HashSet::new();
        let mut usernames = HashSet::new();
        for user in &self.users {
            if !ids.insert(user.id) {
                return Err(config::ConfigError::Message(format!(
                    "users: duplicate id {}",
                    user.id
                )));
            }
            if !usernames.insert(user.username.as_str()) {
                return Err(config::ConfigError::Message(format!(
                    "users: duplicate username '{}'",
                    user.username
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.jwt.expiration_ms, 86_400_000);
        assert!(config.jwt.secret.len() >= 32);
        assert!(config.access.public_paths.contains(&"/auth/login".to_string()));
        assert!(config.users.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_positive_ttl_rejected() {
        let mut config = AppConfig::default();
        config.jwt.expiration_ms = 0;

        assert!(config.validate().is_err());
    }

    fn seed(id: i64, username: &str) -> SeedUser {
        SeedUser {
            id,
            username: username.to_string(),
            password_hash: "$argon2id$x".to_string(),
            status: UserStatus::Active,
            profile: UserProfile::default(),
        }
    }

    #[test]
    fn test_duplicate_seed_users_rejected() {
        let mut config = AppConfig::default();

        config.users = vec![seed(1, "alice"), seed(2, "bob")];
        assert!(config.validate().is_ok());

        config.users = vec![seed(1, "alice"), seed(2, "alice")];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate username 'alice'"));

        config.users = vec![seed(1, "alice"), seed(1, "bob")];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate id 1"));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "jwt": { "expiration_ms": 1000 },
            "users": [
                {
                    "id": 7,
                    "username": "alice",
                    "password_hash": "$argon2id$x",
                    "nickname": "Alice"
                },
                { "id": 8, "username": "bob", "password_hash": "$argon2id$y", "status": "disabled" }
            ]
        }))
        .unwrap();

        assert_eq!(config.jwt.expiration_ms, 1000);
        assert_eq!(config.jwt.secret, JwtSettings::default().secret);
        assert_eq!(config.logging.level, "info");

        let users: Vec<User> = config.users.into_iter().map(User::from).collect();
        assert_eq!(users[0].profile().nickname.as_deref(), Some("Alice"));
        assert!(users[0].is_active());
        assert_eq!(users[1].status(), UserStatus::Disabled);
    }

    #[test]
    fn test_debug_hides_secret() {
        let rendered = format!("{:?}", AppConfig::default());
        assert!(!rendered.contains("must-be-at-least"));
    }
}
