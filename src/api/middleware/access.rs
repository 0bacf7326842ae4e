//! Route protection at the HTTP boundary

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use super::authentication::extract_bearer_token;
use crate::api::types::ApiError;
use crate::domain::auth::{AccessPolicy, AuthState, RequestIdentity};

/// Reject requests to protected routes that carry no bound identity
///
/// Must run inside [`super::authentication_gate`].
pub async fn require_authentication(
    State(policy): State<Arc<AccessPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    if policy.is_public(request.uri().path()) {
        return next.run(request).await;
    }

    let authenticated = request
        .extensions()
        .get::<AuthState>()
        .is_some_and(AuthState::is_authenticated);

    if authenticated {
        return next.run(request).await;
    }

    debug!(path = %request.uri().path(), "Protected route requested without identity");

    // A presented credential that failed validation gets the token message
    if extract_bearer_token(request.headers()).is_some() {
        ApiError::token_rejected().into_response()
    } else {
        ApiError::authentication_required().into_response()
    }
}

/// Extractor for the identity bound by the authentication gate
#[derive(Debug, Clone)]
pub struct CurrentUser(pub RequestIdentity);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthState>()
            .and_then(AuthState::identity)
            .cloned()
            .map(CurrentUser)
            .ok_or_else(ApiError::authentication_required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
        Extension, Router,
    };
    use tower::ServiceExt;

    use crate::api::types::ApiErrorResponse;
    use crate::domain::user::UserId;

    async fn whoami(CurrentUser(identity): CurrentUser) -> String {
        identity.username
    }

    fn app(state: Option<AuthState>) -> Router {
        let policy = Arc::new(AccessPolicy::from_patterns(["/open", "/docs/**"]));

        let router = Router::new()
            .route("/open", get(|| async { "open" }))
            .route("/docs/guide", get(|| async { "guide" }))
            .route("/private", get(whoami))
            .layer(from_fn_with_state(policy, require_authentication));

        match state {
            Some(state) => router.layer(Extension(state)),
            None => router,
        }
    }

    fn alice() -> AuthState {
        AuthState::Authenticated(RequestIdentity {
            user_id: UserId::new(42),
            username: "alice".to_string(),
        })
    }

    async fn send(app: Router, uri: &str, authorization: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut builder = axum::http::Request::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }

        let response = app
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_public_routes_pass_without_identity() {
        let (status, body) = send(app(None), "/open", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"open");

        let (status, _) = send(app(None), "/docs/guide", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_protected_route_requires_identity() {
        let (status, body) = send(app(Some(AuthState::Unauthenticated)), "/private", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let error: ApiErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error.code.as_deref(), Some("authentication_required"));
    }

    #[tokio::test]
    async fn test_rejected_token_gets_generic_message() {
        let (status, body) = send(app(None), "/private", Some("Bearer forged")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let error: ApiErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error.message, "Token invalid or expired");
    }

    #[tokio::test]
    async fn test_protected_route_with_identity() {
        let (status, body) = send(app(Some(alice())), "/private", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"alice");
    }

    #[tokio::test]
    async fn test_unknown_route_is_protected() {
        let (status, _) = send(app(None), "/nowhere", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(app(Some(alice())), "/nowhere", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
