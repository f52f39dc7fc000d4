//! Navigation routes and their parameters.

/// Contact name used when a chat is opened without one.
pub const DEFAULT_CHAT_USER: &str = "SkillSwap User";

/// Parameters of the direct message screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectMessageParams {
    user_name: Option<String>,
    is_existing_chat: bool,
}

impl DirectMessageParams {
    /// Starts a fresh chat with the given user.
    #[must_use]
    pub fn new_chat(user_name: impl Into<String>) -> Self {
        Self {
            user_name: Some(user_name.into()),
            is_existing_chat: false,
        }
    }

    /// Reopens an ongoing chat with the given user.
    #[must_use]
    pub fn existing_chat(user_name: impl Into<String>) -> Self {
        Self {
            user_name: Some(user_name.into()),
            is_existing_chat: true,
        }
    }

    /// Returns contact name, or the placeholder when none was passed.
    #[must_use]
    pub fn user_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or(DEFAULT_CHAT_USER)
    }

    /// Returns whether mock history should be loaded.
    #[must_use]
    pub const fn is_existing_chat(&self) -> bool {
        self.is_existing_chat
    }
}

/// Named navigation destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
    ConversationList,
    DirectMessage(DirectMessageParams),
    Profile,
    CreatePost,
    EditProfile,
}

impl Route {
    /// Returns route name for logs and headers.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Home => "Home",
            Self::ConversationList => "ConversationList",
            Self::DirectMessage(_) => "DirectMessage",
            Self::Profile => "Profile",
            Self::CreatePost => "CreatePost",
            Self::EditProfile => "EditProfile",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_fall_back() {
        let params = DirectMessageParams::default();
        assert_eq!(params.user_name(), "SkillSwap User");
        assert!(!params.is_existing_chat());
    }

    #[test]
    fn test_chat_constructors() {
        let fresh = DirectMessageParams::new_chat("Alex Johnson");
        assert_eq!(fresh.user_name(), "Alex Johnson");
        assert!(!fresh.is_existing_chat());

        let existing = DirectMessageParams::existing_chat("Maria Garcia");
        assert!(existing.is_existing_chat());
    }

    #[test]
    fn test_route_display() {
        let route = Route::DirectMessage(DirectMessageParams::default());
        assert_eq!(route.to_string(), "DirectMessage");
        assert_eq!(Route::Login.to_string(), "Login");
    }
}
