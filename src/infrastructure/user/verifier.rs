//! Username/password verification against the user store

use std::sync::Arc;

use tracing::warn;

use crate::domain::auth::AuthError;
use crate::domain::user::{User, UserRepository};

use super::password::PasswordHasher;

/// Checks a presented password against the stored hash and account status
#[derive(Clone)]
pub struct CredentialVerifier {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl std::fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialVerifier")
            .field("hasher", &self.hasher)
            .finish_non_exhaustive()
    }
}

impl CredentialVerifier {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Verify a username/password pair.
    ///
    /// Unknown usernames and wrong passwords both yield
    /// [`AuthError::InvalidCredentials`]. The account status is only
    /// revealed once the password has matched.
    pub async fn verify(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let Some(user) = self.repository.get_by_username(username).await? else {
            warn!(username = %username, "Login rejected: unknown username");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.hasher.verify(password, user.password_hash()) {
            warn!(username = %username, "Login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        if !user.is_active() {
            warn!(
                username = %username,
                status = ?user.status(),
                "Login rejected: account disabled"
            );
            return Err(AuthError::AccountDisabled);
        }

        Ok(user)
    }
}
