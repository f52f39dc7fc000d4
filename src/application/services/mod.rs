//! Application services.

pub mod navigator;
pub mod notice_queue;
pub mod timeline;

pub use navigator::Navigator;
pub use notice_queue::NoticeQueue;
pub use timeline::{DelayTimer, FadeDurations, FadeTimeline};
