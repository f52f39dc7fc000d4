//! Domain layer with core entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Blocking user notices.
pub mod notice;
/// Port definitions.
pub mod ports;
/// Navigation routes.
pub mod route;

pub use entities::{Profile, ProfileStore};
pub use errors::{AuthError, PostError};
pub use notice::{Notice, NoticeFollowUp, NoticeLevel};
pub use ports::{AuthPort, CatalogPort};
pub use route::{DirectMessageParams, Route};
