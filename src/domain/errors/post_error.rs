//! Post creation error types.

use thiserror::Error;

/// Post form validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostError {
    /// Title, category or description is blank.
    #[error("Please fill out all fields before submitting.")]
    MissingFields,
}

impl PostError {
    /// Returns dialog title for this error.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::MissingFields => "Missing Fields",
        }
    }
}
