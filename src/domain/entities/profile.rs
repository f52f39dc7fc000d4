//! User profile entity and its shared store.

use std::sync::Arc;

use parking_lot::RwLock;

/// Display profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    name: String,
    bio: String,
    skills: Vec<String>,
    joined_date: String,
}

impl Profile {
    /// Creates new profile.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        bio: impl Into<String>,
        skills: Vec<String>,
        joined_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            bio: bio.into(),
            skills,
            joined_date: joined_date.into(),
        }
    }

    /// Returns display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns biography.
    #[must_use]
    pub fn bio(&self) -> &str {
        &self.bio
    }

    /// Returns skills in display order.
    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Returns join date label.
    #[must_use]
    pub fn joined_date(&self) -> &str {
        &self.joined_date
    }

    /// Returns skills as a single comma separated string.
    #[must_use]
    pub fn skills_text(&self) -> String {
        self.skills.join(", ")
    }
}

/// Replacement values written by the edit-profile flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    /// New display name.
    pub name: String,
    /// New biography.
    pub bio: String,
    /// New skills list.
    pub skills: Vec<String>,
}

impl ProfileUpdate {
    /// Builds an update from raw form text, splitting skills on commas.
    #[must_use]
    pub fn from_form(name: &str, bio: &str, skills: &str) -> Self {
        Self {
            name: name.to_string(),
            bio: bio.to_string(),
            skills: parse_skills(skills),
        }
    }
}

/// Splits comma separated skills, trimming entries and dropping empty ones.
#[must_use]
pub fn parse_skills(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Shared handle to the current profile.
///
/// Cloning the store clones the handle, not the profile. The only mutation
/// is [`ProfileStore::replace`].
#[derive(Debug, Clone)]
pub struct ProfileStore {
    inner: Arc<RwLock<Profile>>,
}

impl ProfileStore {
    /// Creates store holding the given profile.
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self {
            inner: Arc::new(RwLock::new(profile)),
        }
    }

    /// Returns a copy of the current profile.
    #[must_use]
    pub fn snapshot(&self) -> Profile {
        self.inner.read().clone()
    }

    /// Returns current display name.
    #[must_use]
    pub fn name(&self) -> String {
        self.inner.read().name.clone()
    }

    /// Replaces name, bio and skills. The join date is kept.
    pub fn replace(&self, update: ProfileUpdate) {
        let mut profile = self.inner.write();
        profile.name = update.name;
        profile.bio = update.bio;
        profile.skills = update.skills;
    }
}
