use std::collections::VecDeque;

use crate::domain::{Notice, NoticeFollowUp};

/// FIFO of blocking notices. The front notice is shown until dismissed.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    queue: VecDeque<Notice>,
}

impl NoticeQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) {
        self.queue.push_back(notice);
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Notice::info(title, message));
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Notice::success(title, message));
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Notice::error(title, message));
    }

    /// Removes the front notice and returns its follow-up, if any.
    pub fn dismiss(&mut self) -> Option<NoticeFollowUp> {
        self.queue.pop_front().and_then(|notice| notice.follow_up)
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.queue.front()
    }

    #[must_use]
    pub fn is_blocking(&self) -> bool {
        !self.queue.is_empty()
    }
}
