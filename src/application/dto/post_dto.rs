//! Post creation DTOs.

/// Raw post form data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostRequest {
    /// Post title.
    pub title: String,
    /// Category or skill.
    pub category: String,
    /// Detailed description.
    pub description: String,
}

impl PostRequest {
    /// Creates new post request.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            description: description.into(),
        }
    }
}

/// Validated post. Every field except `entered_title` is trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    /// Post title.
    pub title: String,
    /// Category or skill.
    pub category: String,
    /// Detailed description.
    pub description: String,
    /// Title exactly as typed.
    pub entered_title: String,
}

impl PostDraft {
    /// Returns confirmation text shown after creation, quoting the title as typed.
    #[must_use]
    pub fn confirmation(&self) -> String {
        format!("Your post for \"{}\" has been created!", self.entered_title)
    }
}
