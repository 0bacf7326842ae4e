//! HS512 JWT issuance and validation

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt::Debug;

use crate::domain::auth::{Claims, TokenError};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Minimum accepted length of the signing secret, in bytes
pub const MIN_SECRET_BYTES: usize = 32;

/// Algorithm every issued token is signed with and every presented token must declare
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS512;

/// Configuration for JWT service
#[derive(Clone)]
pub struct JwtConfig {
    /// Shared HMAC secret
    pub secret: String,
    /// Token lifetime in milliseconds
    pub expiration_ms: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration_ms: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_ms,
        }
    }
}

impl Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[hidden]")
            .field("expiration_ms", &self.expiration_ms)
            .finish()
    }
}

/// Issues and validates signed, time-bounded access tokens
pub trait TokenCodec: Send + Sync + Debug {
    /// Issue a token for the user, valid for `ttl_ms` milliseconds from now
    fn issue(&self, user_id: UserId, username: &str, ttl_ms: i64) -> Result<String, DomainError>;

    /// Validate a token and return its claims
    fn validate(&self, token: &str) -> Result<Claims, TokenError>;

    /// Configured token lifetime in milliseconds
    fn expiration_ms(&self) -> i64;
}

/// JWT service signing with a shared HMAC-SHA-512 secret
#[derive(Clone)]
pub struct JwtService {
    expiration_ms: i64,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("algorithm", &SIGNING_ALGORITHM)
            .field("expiration_ms", &self.expiration_ms)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Create a new JWT service, rejecting secrets shorter than 32 bytes
    pub fn new(config: JwtConfig) -> Result<Self, DomainError> {
        let secret = config.secret.as_bytes();

        if secret.len() < MIN_SECRET_BYTES {
            return Err(DomainError::configuration(format!(
                "JWT secret must be at least {} bytes, got {}",
                MIN_SECRET_BYTES,
                secret.len()
            )));
        }

        let mut validation = Validation::new(SIGNING_ALGORITHM);
        // Expiry is checked against `exp` without leeway after decoding
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            expiration_ms: config.expiration_ms,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Issue a token whose `iat` is `now`
    pub fn issue_at(
        &self,
        user_id: UserId,
        username: &str,
        ttl_ms: i64,
        now: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let claims = Claims::new(user_id, username, now, ttl_ms);

        encode(&Header::new(SIGNING_ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to sign JWT: {}", e)))
    }

    /// Validate a token as of `now`
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let token = token.trim();

        if token.is_empty() {
            return Err(TokenError::Empty);
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| classify(e.kind(), token))?;

        let claims = token_data.claims;

        if claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

impl TokenCodec for JwtService {
    fn issue(&self, user_id: UserId, username: &str, ttl_ms: i64) -> Result<String, DomainError> {
        self.issue_at(user_id, username, ttl_ms, Utc::now())
    }

    fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate_at(token, Utc::now())
    }

    fn expiration_ms(&self) -> i64 {
        self.expiration_ms
    }
}

/// Map a decoder failure onto the token taxonomy
fn classify(kind: &ErrorKind, token: &str) -> TokenError {
    match kind {
        ErrorKind::InvalidSignature => TokenError::BadSignature,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
            TokenError::UnsupportedAlgorithm
        }
        // Headers naming an algorithm the decoder has no variant for ("none")
        // fail header deserialization
        ErrorKind::Json(_) if declares_foreign_algorithm(token) => {
            TokenError::UnsupportedAlgorithm
        }
        _ => TokenError::Malformed,
    }
}

/// True when the header segment is readable JSON whose `alg` is not HS512
fn declares_foreign_algorithm(token: &str) -> bool {
    let Some(header) = token.split('.').next() else {
        return false;
    };

    let Ok(bytes) = URL_SAFE_NO_PAD.decode(header) else {
        return false;
    };

    serde_json::from_slice::<serde_json::Value>(&bytes)
        .ok()
        .and_then(|value| value.get("alg").and_then(|alg| alg.as_str().map(str::to_owned)))
        .is_some_and(|alg| alg != "HS512")
}
