//! Domain entity definitions.

mod conversation;
mod message;
mod profile;
mod skill_offer;

pub use conversation::Conversation;
pub use message::{ChatLog, Message, Sender};
pub use profile::{Profile, ProfileStore, ProfileUpdate, parse_skills};
pub use skill_offer::SkillOffer;
