//! Authentication infrastructure module
//!
//! This module provides HS512 JWT issuance/validation and the login/logout
//! service built on top of credential verification.

mod jwt;
mod service;

pub use jwt::{JwtConfig, JwtService, TokenCodec, MIN_SECRET_BYTES, SIGNING_ALGORITHM};
pub use service::{AuthService, LoginResponse, UserInfo, BEARER_TOKEN_TYPE};
