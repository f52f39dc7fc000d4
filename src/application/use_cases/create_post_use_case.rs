//! Post creation use case.

use tracing::{debug, info};

use crate::application::dto::{PostDraft, PostRequest};
use crate::domain::errors::PostError;

/// Validates new skill posts.
///
/// Accepted posts are not added to any feed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreatePostUseCase;

impl CreatePostUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates the post form.
    ///
    /// # Errors
    /// Returns `MissingFields` when any field is blank after trimming.
    pub fn execute(&self, request: &PostRequest) -> Result<PostDraft, PostError> {
        let title = request.title.trim();
        let category = request.category.trim();
        let description = request.description.trim();

        if title.is_empty() || category.is_empty() || description.is_empty() {
            debug!("Post rejected: blank field");
            return Err(PostError::MissingFields);
        }

        info!(title = %title, category = %category, "Post created");
        Ok(PostDraft {
            title: title.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            entered_title: request.title.clone(),
        })
    }
}
