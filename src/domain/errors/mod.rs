//! Domain error types.

mod auth_error;
mod post_error;

pub use auth_error::AuthError;
pub use post_error::PostError;
