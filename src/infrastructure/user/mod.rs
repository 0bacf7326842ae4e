//! User infrastructure module
//!
//! Argon2 password hashing, the in-memory user store, credential
//! verification for login, and the registration service.

mod password;
mod repository;
mod service;
mod verifier;

pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::InMemoryUserRepository;
pub use service::{RegisterUserRequest, UserService};
pub use verifier::CredentialVerifier;
