//! Authentication error types.

use thiserror::Error;

/// Login and signup validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A required field was left empty.
    #[error("Please fill in all fields")]
    MissingFields,

    /// Email and password do not match the known account.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl AuthError {
    /// Returns dialog title for this error.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        "Error"
    }
}
