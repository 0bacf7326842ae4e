//! Per-request authentication state

use serde::Serialize;

use super::claims::Claims;
use crate::domain::user::UserId;

/// Identity proven by a validated bearer token, scoped to one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestIdentity {
    pub user_id: UserId,
    pub username: String,
}

impl From<Claims> for RequestIdentity {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username,
        }
    }
}

/// Authentication state bound into a request's extensions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated(RequestIdentity),
}

impl AuthState {
    pub fn identity(&self) -> Option<&RequestIdentity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_from_claims() {
        let claims = Claims {
            sub: "alice".to_string(),
            user_id: UserId::new(42),
            username: "alice".to_string(),
            iat: 0,
            exp: 10,
        };

        let identity = RequestIdentity::from(claims);
        assert_eq!(identity.user_id, UserId::new(42));
        assert_eq!(identity.username, "alice");
    }

    #[test]
    fn test_default_state_is_unauthenticated() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(state.identity().is_none());
    }
}
