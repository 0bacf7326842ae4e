//! API middleware components

pub mod access;
pub mod authentication;
pub mod logging;

pub use access::{require_authentication, CurrentUser};
pub use authentication::{authentication_gate, extract_bearer_token, resolve_identity};
pub use logging::logging_middleware;
