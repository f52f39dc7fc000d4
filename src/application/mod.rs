//! Application layer with use cases, DTOs and screen-independent services.

/// Data transfer objects.
pub mod dto;
/// Navigation, notices and timers.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{LoginRequest, PostDraft, PostRequest, SignupRequest};
pub use services::{Navigator, NoticeQueue};
pub use use_cases::{CreatePostUseCase, LoginUseCase, UpdateProfileUseCase};
