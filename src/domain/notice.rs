//! Blocking notices shown to the user.

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Step to run once a notice has been dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeFollowUp {
    /// Pop the current screen.
    GoBack,
}

/// Dialog message that stays until the user dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
    pub follow_up: Option<NoticeFollowUp>,
}

impl Notice {
    #[must_use]
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            follow_up: None,
        }
    }

    #[must_use]
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, message)
    }

    #[must_use]
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title, message)
    }

    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, message)
    }

    #[must_use]
    pub const fn with_follow_up(mut self, follow_up: NoticeFollowUp) -> Self {
        self.follow_up = Some(follow_up);
        self
    }
}

impl From<super::AuthError> for Notice {
    fn from(error: super::AuthError) -> Self {
        Self::error(error.title(), error.to_string())
    }
}

impl From<super::PostError> for Notice {
    fn from(error: super::PostError) -> Self {
        Self::error(error.title(), error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AuthError, PostError};

    #[test]
    fn test_notice_creation() {
        let n = Notice::success("Success", "Login successful!");
        assert_eq!(n.level, NoticeLevel::Success);
        assert_eq!(n.title, "Success");
        assert_eq!(n.message, "Login successful!");
        assert!(n.follow_up.is_none());
    }

    #[test]
    fn test_follow_up() {
        let n = Notice::success("Post Created", "done").with_follow_up(NoticeFollowUp::GoBack);
        assert_eq!(n.follow_up, Some(NoticeFollowUp::GoBack));
    }

    #[test]
    fn test_from_errors() {
        let auth = Notice::from(AuthError::PasswordMismatch);
        assert_eq!(auth.level, NoticeLevel::Error);
        assert_eq!(auth.title, "Error");
        assert_eq!(auth.message, "Passwords do not match");

        let post = Notice::from(PostError::MissingFields);
        assert_eq!(post.title, "Missing Fields");
        assert_eq!(post.message, "Please fill out all fields before submitting.");
    }
}
