//! Domain layer - Core authentication types and store contracts

pub mod auth;
pub mod error;
pub mod user;

pub use auth::{AccessPolicy, AuthError, AuthState, Claims, RequestIdentity, TokenError};
pub use error::DomainError;
pub use user::{User, UserId, UserRepository, UserStatus};
