//! Authentication domain
//!
//! Token claims, the per-request identity bound by the authentication gate,
//! the public-route table, and the failure taxonomy shared by the login
//! and token paths.

mod claims;
mod error;
mod identity;
mod policy;

pub use claims::Claims;
pub use error::{AuthError, TokenError};
pub use identity::{AuthState, RequestIdentity};
pub use policy::{AccessPolicy, PathPattern};
