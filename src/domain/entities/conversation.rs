//! Conversation list entry.

/// Summary row of a chat with another user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    id: String,
    name: String,
    last_message: String,
    time: String,
    unread_count: u32,
}

impl Conversation {
    /// Creates new conversation summary.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        last_message: impl Into<String>,
        time: impl Into<String>,
        unread_count: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            last_message: last_message.into(),
            time: time.into(),
            unread_count,
        }
    }

    /// Returns conversation id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns contact name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns preview of the last message.
    #[must_use]
    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    /// Returns relative time label.
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns unread message count.
    #[must_use]
    pub const fn unread_count(&self) -> u32 {
        self.unread_count
    }

    /// Returns whether the badge should be shown.
    #[must_use]
    pub const fn has_unread(&self) -> bool {
        self.unread_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_badge() {
        let read = Conversation::new("c2", "Maria Garcia", "See you", "5h ago", 0);
        let unread = Conversation::new("c1", "Alex Johnson", "Hi", "2h ago", 1);

        assert!(!read.has_unread());
        assert!(unread.has_unread());
        assert_eq!(unread.unread_count(), 1);
    }
}
