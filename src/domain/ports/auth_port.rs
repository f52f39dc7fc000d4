//! Authentication port definition.

use crate::domain::errors::AuthError;

/// Port for checking sign-in credentials.
pub trait AuthPort: Send + Sync {
    /// Checks an email and password pair.
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidCredentials`] when the pair is not accepted.
    fn verify(&self, email: &str, password: &str) -> Result<(), AuthError>;
}
