//! Direct message entities.

use chrono::Utc;

/// Author side of a direct message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// The signed-in user.
    User,
    /// The other participant.
    Other,
}

/// Single chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: String,
    text: String,
    sender: Sender,
}

impl Message {
    /// Creates new message.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            sender,
        }
    }

    /// Returns message id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns message sender.
    #[must_use]
    pub const fn sender(&self) -> Sender {
        self.sender
    }

    /// Returns whether the signed-in user wrote this message.
    #[must_use]
    pub const fn is_own(&self) -> bool {
        matches!(self.sender, Sender::User)
    }
}

/// In-memory message history of one chat, newest message first.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    messages: Vec<Message>,
}

impl ChatLog {
    /// Creates empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates log from a chronological history.
    #[must_use]
    pub fn seeded(history: Vec<Message>) -> Self {
        let mut messages = history;
        messages.reverse();
        Self { messages }
    }

    /// Returns messages, newest first.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Prepends a message from the user.
    ///
    /// Blank text is ignored and yields `None`. Stored text is trimmed.
    pub fn send(&mut self, text: &str) -> Option<&Message> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_id(Utc::now().timestamp_millis());
        self.messages.insert(0, Message::new(id, text, Sender::User));
        self.messages.first()
    }

    /// Millisecond timestamp id, bumped past the newest one when sends collide.
    fn next_id(&self, now_ms: i64) -> String {
        let newest = self
            .messages
            .first()
            .and_then(|message| message.id.parse::<i64>().ok());

        match newest {
            Some(last) if last >= now_ms => (last + 1).to_string(),
            _ => now_ms.to_string(),
        }
    }
}
