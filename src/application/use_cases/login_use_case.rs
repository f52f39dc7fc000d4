//! Login and signup use case implementation.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::dto::{LoginRequest, SignupRequest};
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;

/// Handles the sign-in and account creation forms.
#[derive(Clone)]
pub struct LoginUseCase {
    auth_port: Arc<dyn AuthPort>,
}

impl LoginUseCase {
    /// Creates new login use case.
    #[must_use]
    pub const fn new(auth_port: Arc<dyn AuthPort>) -> Self {
        Self { auth_port }
    }

    /// Checks the sign-in form.
    ///
    /// # Errors
    /// Returns `MissingFields` when email or password is empty and
    /// `InvalidCredentials` when the pair is not accepted.
    pub fn login(&self, request: &LoginRequest) -> Result<(), AuthError> {
        if request.has_empty_field() {
            debug!("Login rejected: empty field");
            return Err(AuthError::MissingFields);
        }

        self.auth_port
            .verify(&request.email, &request.password)
            .inspect_err(|e| debug!(error = %e, "Login rejected"))?;

        info!("Login accepted");
        Ok(())
    }

    /// Checks the account creation form.
    ///
    /// No account is stored; success only means the form is complete.
    ///
    /// # Errors
    /// Returns `MissingFields` when any field is empty and `PasswordMismatch`
    /// when the confirmation differs.
    pub fn signup(&self, request: &SignupRequest) -> Result<(), AuthError> {
        if request.has_empty_field() {
            debug!("Signup rejected: empty field");
            return Err(AuthError::MissingFields);
        }

        if !request.passwords_match() {
            debug!("Signup rejected: password mismatch");
            return Err(AuthError::PasswordMismatch);
        }

        info!("Signup accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockAuthPort;
    use crate::infrastructure::FixedCredentialAuth;
    use test_case::test_case;

    fn use_case() -> LoginUseCase {
        LoginUseCase::new(Arc::new(FixedCredentialAuth::default()))
    }

    #[test]
    fn test_known_credentials_accepted() {
        let request = LoginRequest::new("test@student.com", "12345");
        assert_eq!(use_case().login(&request), Ok(()));
    }

    #[test_case("", "12345" ; "empty_email")]
    #[test_case("test@student.com", "" ; "empty_password")]
    #[test_case("", "" ; "both_empty")]
    fn test_login_missing_fields(email: &str, password: &str) {
        let request = LoginRequest::new(email, password);
        assert_eq!(use_case().login(&request), Err(AuthError::MissingFields));
    }

    #[test_case("test@student.com", "54321" ; "wrong_password")]
    #[test_case("other@student.com", "12345" ; "wrong_email")]
    #[test_case("TEST@student.com", "12345" ; "case_sensitive")]
    #[test_case(" test@student.com", "12345" ; "not_trimmed")]
    fn test_login_invalid_credentials(email: &str, password: &str) {
        let request = LoginRequest::new(email, password);
        assert_eq!(
            use_case().login(&request),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_empty_fields_skip_port() {
        let port = Arc::new(MockAuthPort::new(true));
        let use_case = LoginUseCase::new(port.clone());

        let _ = use_case.login(&LoginRequest::new("", ""));
        assert_eq!(port.calls(), 0);

        assert!(use_case.login(&LoginRequest::new("a", "b")).is_ok());
        assert_eq!(port.calls(), 1);
    }

    #[test_case("", "a@b.c", "pw", "pw" ; "empty_name")]
    #[test_case("Ann", "", "pw", "pw" ; "empty_email")]
    #[test_case("Ann", "a@b.c", "", "pw" ; "empty_password")]
    #[test_case("Ann", "a@b.c", "pw", "" ; "empty_confirm")]
    fn test_signup_missing_fields(name: &str, email: &str, password: &str, confirm: &str) {
        let request = SignupRequest::new(name, email, password, confirm);
        assert_eq!(use_case().signup(&request), Err(AuthError::MissingFields));
    }

    #[test]
    fn test_signup_password_mismatch() {
        let request = SignupRequest::new("Ann", "a@b.c", "secret", "secreT");
        assert_eq!(use_case().signup(&request), Err(AuthError::PasswordMismatch));
    }

    #[test]
    fn test_signup_valid() {
        let request = SignupRequest::new("Ann", "a@b.c", "secret", "secret");
        assert_eq!(use_case().signup(&request), Ok(()));
    }
}
