//! Data transfer objects.

mod auth_dto;
mod post_dto;

pub use auth_dto::{LoginRequest, SignupRequest};
pub use post_dto::{PostDraft, PostRequest};
