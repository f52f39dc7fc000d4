//! Profile editing use case.

use tracing::info;

use crate::domain::entities::{Profile, ProfileStore, ProfileUpdate};

/// Writes edited profile fields to the shared store.
#[derive(Debug, Clone)]
pub struct UpdateProfileUseCase {
    store: ProfileStore,
}

impl UpdateProfileUseCase {
    /// Creates new use case bound to a store.
    #[must_use]
    pub const fn new(store: ProfileStore) -> Self {
        Self { store }
    }

    /// Replaces name, bio and skills from raw form text.
    ///
    /// Skills are split on commas; blank entries are dropped.
    pub fn execute(&self, name: &str, bio: &str, skills: &str) -> Profile {
        let update = ProfileUpdate::from_form(name, bio, skills);
        info!(name = %update.name, skills = update.skills.len(), "Profile updated");
        self.store.replace(update);
        self.store.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_replaces_store() {
        let store = ProfileStore::new(Profile::new("Old", "Old bio", vec![], "March 2024"));
        let use_case = UpdateProfileUseCase::new(store.clone());

        let saved = use_case.execute("New", "New bio", "A, B ,, C");

        assert_eq!(saved.skills(), ["A", "B", "C"]);
        assert_eq!(store.snapshot(), saved);
        assert_eq!(saved.joined_date(), "March 2024");
    }
}
