//! Skill offer posted to the home feed.

/// A post offering to teach a skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillOffer {
    id: String,
    user_name: String,
    post_time: String,
    category: String,
    title: String,
    description: String,
}

impl SkillOffer {
    /// Creates new offer.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        user_name: impl Into<String>,
        post_time: impl Into<String>,
        category: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user_name: user_name.into(),
            post_time: post_time.into(),
            category: category.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Returns offer id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns name of the posting user.
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Returns relative post time label.
    #[must_use]
    pub fn post_time(&self) -> &str {
        &self.post_time
    }

    /// Returns skill category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns offer title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns offer description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
