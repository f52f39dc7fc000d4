//! Authentication DTOs.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

const REDACTED: &str = "<redacted>";

/// Sign-in form data.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl LoginRequest {
    /// Creates new login request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns whether any field is empty.
    #[must_use]
    pub fn has_empty_field(&self) -> bool {
        self.email.is_empty() || self.password.is_empty()
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Account creation form data.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SignupRequest {
    /// Full display name.
    pub full_name: String,
    /// Account email.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Repeated password.
    pub confirm_password: String,
}

impl SignupRequest {
    /// Creates new signup request.
    #[must_use]
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Returns whether any field is empty.
    #[must_use]
    pub fn has_empty_field(&self) -> bool {
        self.full_name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
    }

    /// Returns whether both password entries are equal.
    #[must_use]
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("confirm_password", &REDACTED)
            .finish()
    }
}
