//! Use case implementations.

mod create_post_use_case;
mod login_use_case;
mod update_profile_use_case;

pub use create_post_use_case::CreatePostUseCase;
pub use login_use_case::LoginUseCase;
pub use update_profile_use_case::UpdateProfileUseCase;
