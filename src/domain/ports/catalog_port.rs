//! Mock data source port definition.

use crate::domain::entities::{Conversation, Message, Profile, SkillOffer};

/// Port supplying the records the screens display.
pub trait CatalogPort: Send + Sync {
    /// Profile the session starts with.
    fn default_profile(&self) -> Profile;

    /// Skill offers shown on the home feed, in display order.
    fn skill_offers(&self) -> Vec<SkillOffer>;

    /// Conversations shown on the chat list, in display order.
    fn conversations(&self) -> Vec<Conversation>;

    /// History loaded into an existing chat, oldest message first.
    fn chat_history(&self) -> Vec<Message>;
}
