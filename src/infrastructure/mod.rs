//! Infrastructure layer - Token signing, password hashing, user storage

pub mod auth;
pub mod logging;
pub mod user;
