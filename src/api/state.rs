//! Application state for shared services

use std::sync::Arc;

use crate::domain::auth::AccessPolicy;
use crate::infrastructure::auth::{AuthService, TokenCodec};
use crate::infrastructure::user::UserService;

/// Handles built once at startup and cloned into every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub token_codec: Arc<dyn TokenCodec>,
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub access_policy: Arc<AccessPolicy>,
}

impl AppState {
    pub fn new(
        token_codec: Arc<dyn TokenCodec>,
        auth_service: Arc<AuthService>,
        user_service: Arc<UserService>,
        access_policy: Arc<AccessPolicy>,
    ) -> Self {
        Self {
            token_codec,
            auth_service,
            user_service,
            access_policy,
        }
    }
}
