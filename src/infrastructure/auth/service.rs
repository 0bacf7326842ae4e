//! Login and logout use cases

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::auth::{AuthError, Claims, TokenError};
use crate::domain::user::{User, UserId};

use super::jwt::TokenCodec;
use crate::infrastructure::user::CredentialVerifier;

/// Token type announced to clients
pub const BEARER_TOKEN_TYPE: &str = "Bearer";

/// Public summary of an authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_id: UserId,
    pub username: String,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        let profile = user.profile();

        Self {
            user_id: user.id(),
            username: user.username().to_string(),
            nickname: profile.nickname.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            avatar: profile.avatar.clone(),
        }
    }
}

/// Successful login payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Token lifetime in seconds
    pub expires_in: i64,
    pub user_info: UserInfo,
}

/// Ties credential verification to token issuance
#[derive(Debug, Clone)]
pub struct AuthService {
    verifier: Arc<CredentialVerifier>,
    tokens: Arc<dyn TokenCodec>,
}

impl AuthService {
    pub fn new(verifier: Arc<CredentialVerifier>, tokens: Arc<dyn TokenCodec>) -> Self {
        Self { verifier, tokens }
    }

    /// Verify the credentials and issue an access token.
    ///
    /// Verification failures are returned exactly as the verifier produced
    /// them.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AuthError> {
        info!(username = %username, "Processing login");

        let user = self.verifier.verify(username, password).await?;

        let ttl_ms = self.tokens.expiration_ms();
        let access_token = self.tokens.issue(user.id(), user.username(), ttl_ms)?;

        info!(user_id = %user.id(), username = %user.username(), "Login succeeded, token issued");

        Ok(LoginResponse {
            access_token,
            token_type: BEARER_TOKEN_TYPE,
            expires_in: ttl_ms / 1000,
            user_info: UserInfo::from(&user),
        })
    }

    /// Confirm the token is valid before the client discards it.
    ///
    /// Tokens are stateless, so nothing is cleared server-side; a revocation
    /// list would hook in here.
    pub fn logout(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = self.tokens.validate(token).inspect_err(|e| {
            warn!(kind = e.kind(), "Logout rejected: token invalid");
        })?;

        info!(user_id = %claims.user_id(), username = %claims.username(), "User logged out");

        Ok(claims)
    }
}
