//! Authgate
//!
//! Stateless bearer-token authentication service:
//! - Credential verification against Argon2 password hashes
//! - HS512 JWT issuance and validation
//! - Per-request identity binding with centrally enforced route protection
//! - Login, logout, registration and current-user endpoints

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use domain::auth::AccessPolicy;
use domain::user::{User, UserRepository};
use infrastructure::{
    auth::{AuthService, JwtConfig, JwtService, TokenCodec},
    user::{Argon2Hasher, CredentialVerifier, InMemoryUserRepository, PasswordHasher, UserService},
};

/// Create the application state with custom configuration
///
/// Fails when the configuration is invalid or the signing secret is too
/// short, so a misconfigured process never starts serving.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    config.validate()?;

    let token_codec: Arc<dyn TokenCodec> = Arc::new(JwtService::new(JwtConfig::new(
        config.jwt.secret.clone(),
        config.jwt.expiration_ms,
    ))?);

    let users: Vec<User> = config.users.iter().cloned().map(User::from).collect();
    let seeded = users.len();
    let repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::with_users(users));
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::new());

    let verifier = Arc::new(CredentialVerifier::new(repository.clone(), hasher.clone()));
    let auth_service = Arc::new(AuthService::new(verifier, token_codec.clone()));
    let user_service = Arc::new(UserService::new(repository, hasher));
    let access_policy = Arc::new(AccessPolicy::from_patterns(&config.access.public_paths));

    info!(
        seeded_users = seeded,
        public_paths = access_policy.patterns().len(),
        token_ttl_ms = config.jwt.expiration_ms,
        "Application state created"
    );

    Ok(AppState::new(
        token_codec,
        auth_service,
        user_service,
        access_policy,
    ))
}
