//! Form input validation.
//!
//! All validation here is local: a failing check produces a field-scoped
//! error and never reaches the backend. Checks run in a deterministic order
//! (name before password, password before confirm-password) so the first
//! failing field wins.

use std::fmt;

use thiserror::Error;

/// Form field an error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Password,
    ConfirmPassword,
    Path,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm_password",
            Field::Path => "path",
        };
        write!(f, "{name}")
    }
}

/// Field-scoped validation error, cleared on the next valid submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check a BIP-32 style derivation path: one or more unsigned integers,
/// each optionally hardened with a trailing apostrophe, separated by `/`.
///
/// Equivalent to the grammar `^(\d+'?)(/\d+'?)*$`.
pub fn is_valid_derivation_path(path: &str) -> bool {
    !path.is_empty() && path.split('/').all(is_valid_path_segment)
}

fn is_valid_path_segment(segment: &str) -> bool {
    let digits = segment.strip_suffix('\'').unwrap_or(segment);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Validate the create-wallet form: name, password, confirm-password.
pub fn validate_create_wallet(
    name: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), FieldError> {
    if name.is_empty() {
        return Err(FieldError::new(Field::Name, "This field is required"));
    }
    if password.is_empty() {
        return Err(FieldError::new(Field::Password, "The password is required"));
    }
    if password != confirm_password {
        return Err(FieldError::new(
            Field::ConfirmPassword,
            "The passwords are not matching",
        ));
    }
    Ok(())
}

/// Validate the authenticate form: wallet name and password.
pub fn validate_credentials(name: &str, password: &str) -> Result<(), FieldError> {
    if name.is_empty() {
        return Err(FieldError::new(Field::Name, "This field is required"));
    }
    if password.is_empty() {
        return Err(FieldError::new(Field::Password, "The password is required"));
    }
    Ok(())
}

/// Validate the create-account form: derivation path and password.
pub fn validate_create_account(path: &str, password: &str) -> Result<(), FieldError> {
    if !is_valid_derivation_path(path) {
        return Err(FieldError::new(Field::Path, "Invalid derivation path"));
    }
    if password.is_empty() {
        return Err(FieldError::new(Field::Password, "The password is required"));
    }
    Ok(())
}
