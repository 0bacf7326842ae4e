//! User domain
//!
//! This module provides the stored credential record, registration
//! validation, and the user store trait consulted during authentication.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId, UserProfile, UserStatus};
pub use repository::{NewUser, UserRepository};
pub use validation::{
    validate_email, validate_password, validate_phone, validate_username, UserValidationError,
};

#[cfg(test)]
pub use repository::MockUserRepository;
