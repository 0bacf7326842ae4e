//! Authentication API endpoints
//!
//! Login and registration are public; logout and `/me` sit behind the
//! authentication gate.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::api::middleware::{extract_bearer_token, CurrentUser};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::DomainError;
use crate::infrastructure::auth::{LoginResponse, UserInfo};
use crate::infrastructure::user::RegisterUserRequest;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/logout", post(logout))
        .route("/me", get(get_current_user))
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub nickname: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<RegisterRequest> for RegisterUserRequest {
    fn from(request: RegisterRequest) -> Self {
        Self {
            username: request.username,
            password: request.password,
            nickname: request.nickname,
            email: request.email,
            phone: request.phone,
        }
    }
}

/// Logout response
#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Login with username and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if request.username.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::bad_request("Username and password are required"));
    }

    let response = state
        .auth_service
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(response))
}

/// Register a new account
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserInfo>), ApiError> {
    let user = state.user_service.register(request.into()).await?;

    Ok((StatusCode::CREATED, Json(UserInfo::from(&user))))
}

/// Logout
///
/// POST /auth/logout
///
/// Validates the presented token; nothing is stored server-side, so the
/// client discards the token afterwards.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<LogoutResponse>, ApiError> {
    let token = extract_bearer_token(&headers).ok_or_else(ApiError::authentication_required)?;

    state.auth_service.logout(token)?;

    Ok(Json(LogoutResponse {
        message: "Logged out successfully".to_string(),
    }))
}

/// Get current authenticated user
///
/// GET /auth/me
pub async fn get_current_user(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> Result<Json<UserInfo>, ApiError> {
    let user = state
        .user_service
        .get(identity.user_id)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(format!("User '{}' not found", identity.user_id))
        })?;

    Ok(Json(UserInfo::from(&user)))
}
