//! User validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username must be {0}-{1} characters of letters, digits or underscores")]
    InvalidUsername(usize, usize),

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Password must be {0}-{1} characters long")]
    PasswordLength(usize, usize),

    #[error("Password may only contain letters and digits")]
    InvalidPasswordCharacter,

    #[error("Password must contain a lowercase letter, an uppercase letter and a digit")]
    WeakPassword,

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Phone number is not valid")]
    InvalidPhone,
}

const MIN_USERNAME_LENGTH: usize = 4;
const MAX_USERNAME_LENGTH: usize = 20;
const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 20;

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]{4,20}$").expect("valid username pattern"));

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1[3-9]\d{9}$").expect("valid phone pattern"));

/// Validate a username
///
/// Rules:
/// - Cannot be empty
/// - 4 to 20 characters
/// - Only ASCII letters, digits and underscores
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if username.is_empty() {
        return Err(UserValidationError::EmptyUsername);
    }

    if !USERNAME_PATTERN.is_match(username) {
        return Err(UserValidationError::InvalidUsername(
            MIN_USERNAME_LENGTH,
            MAX_USERNAME_LENGTH,
        ));
    }

    Ok(())
}

/// Validate a password for registration
///
/// Rules:
/// - 8 to 20 characters
/// - Only ASCII letters and digits
/// - At least one lowercase letter, one uppercase letter and one digit
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.is_empty() {
        return Err(UserValidationError::EmptyPassword);
    }

    let len = password.chars().count();

    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&len) {
        return Err(UserValidationError::PasswordLength(
            MIN_PASSWORD_LENGTH,
            MAX_PASSWORD_LENGTH,
        ));
    }

    if !password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(UserValidationError::InvalidPasswordCharacter);
    }

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_lower && has_upper && has_digit) {
        return Err(UserValidationError::WeakPassword);
    }

    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(UserValidationError::InvalidEmail)
    }
}

/// Mobile numbers in the 11-digit `1[3-9]xxxxxxxxx` format
pub fn validate_phone(phone: &str) -> Result<(), UserValidationError> {
    if PHONE_PATTERN.is_match(phone) {
        Ok(())
    } else {
        Err(UserValidationError::InvalidPhone)
    }
}
