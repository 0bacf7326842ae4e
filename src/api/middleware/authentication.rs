//! Bearer token authentication gate
//!
//! Binds an [`AuthState`] into every request's extensions. The gate never
//! rejects: a missing, foreign or invalid credential leaves the request
//! `Unauthenticated` and enforcement happens in [`super::access`].

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::domain::auth::{AuthState, RequestIdentity};
use crate::infrastructure::auth::TokenCodec;

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// Returns `None` when the header is absent, not valid ASCII, or uses another
/// scheme. The remainder after the prefix is trimmed but may be empty.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
}

/// Resolve the authentication state carried by a request's headers
pub fn resolve_identity(headers: &HeaderMap, codec: &dyn TokenCodec) -> AuthState {
    let Some(token) = extract_bearer_token(headers) else {
        return AuthState::Unauthenticated;
    };

    match codec.validate(token) {
        Ok(claims) => {
            let identity = RequestIdentity::from(claims);
            debug!(
                user_id = %identity.user_id,
                username = %identity.username,
                "Bound request identity"
            );
            AuthState::Authenticated(identity)
        }
        Err(e) => {
            warn!(kind = e.kind(), "Bearer token rejected");
            AuthState::Unauthenticated
        }
    }
}

/// Middleware binding the request identity, then always forwarding the request
pub async fn authentication_gate(
    State(codec): State<Arc<dyn TokenCodec>>,
    mut request: Request,
    next: Next,
) -> Response {
    let already_bound = request
        .extensions()
        .get::<AuthState>()
        .is_some_and(AuthState::is_authenticated);

    if !already_bound {
        let state = resolve_identity(request.headers(), codec.as_ref());
        request.extensions_mut().insert(state);
    }

    next.run(request).await
}
