//! Credential check against a single built-in account.

use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;

const DEMO_EMAIL: &str = "test@student.com";
const DEMO_PASSWORD: &str = "12345";

/// Accepts exactly one email and password pair. Comparison is exact.
#[derive(Debug, Clone)]
pub struct FixedCredentialAuth {
    email: String,
    password: String,
}

impl FixedCredentialAuth {
    /// Creates a checker for the given pair.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Default for FixedCredentialAuth {
    fn default() -> Self {
        Self::new(DEMO_EMAIL, DEMO_PASSWORD)
    }
}

impl AuthPort for FixedCredentialAuth {
    fn verify(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if email == self.email && password == self.password {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_account() {
        let auth = FixedCredentialAuth::default();
        assert!(auth.verify("test@student.com", "12345").is_ok());
        assert_eq!(
            auth.verify("test@student.com", "123456"),
            Err(AuthError::InvalidCredentials)
        );
    }
}
