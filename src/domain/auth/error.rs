//! Authentication failure taxonomy

use thiserror::Error;

use crate::domain::DomainError;

/// Failures while checking a username/password pair
///
/// An unknown username and a wrong password both map to
/// `InvalidCredentials`.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Account is disabled")]
    AccountDisabled,

    /// Store or signing failure, outside the credential taxonomy
    #[error(transparent)]
    Internal(#[from] DomainError),
}

/// Reasons a presented token was refused
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is empty")]
    Empty,

    #[error("token is malformed")]
    Malformed,

    #[error("token signature does not verify")]
    BadSignature,

    #[error("token has expired")]
    Expired,

    #[error("token algorithm is not supported")]
    UnsupportedAlgorithm,
}

impl TokenError {
    /// Stable identifier used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Malformed => "malformed",
            Self::BadSignature => "bad_signature",
            Self::Expired => "expired",
            Self::UnsupportedAlgorithm => "unsupported_algorithm",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_messages_do_not_name_the_field() {
        let msg = AuthError::InvalidCredentials.to_string();
        assert_eq!(msg, "Invalid username or password");
    }

    #[test]
    fn test_internal_is_transparent() {
        let err = AuthError::from(DomainError::storage("db down"));
        assert_eq!(err.to_string(), "Storage error: db down");
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[test]
    fn test_token_error_kinds_are_distinct() {
        let kinds = [
            TokenError::Empty,
            TokenError::Malformed,
            TokenError::BadSignature,
            TokenError::Expired,
            TokenError::UnsupportedAlgorithm,
        ]
        .map(|e| e.kind());

        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
