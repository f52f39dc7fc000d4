//! Direct message screen.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Widget, Wrap},
};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use super::utils::screen_layout;
use crate::domain::DirectMessageParams;
use crate::domain::entities::{ChatLog, Message};
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{HeaderBar, HeaderBarStyle, StatusBar, TextInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectMessageAction {
    None,
    Back,
}

pub struct DirectMessageScreen {
    user_name: String,
    log: ChatLog,
    input: TextInput,
    theme: Theme,
}

impl DirectMessageScreen {
    /// Opens a chat. Existing chats are seeded with `history`, new ones start empty.
    #[must_use]
    pub fn new(params: &DirectMessageParams, history: Vec<Message>, theme: Theme) -> Self {
        let user_name = params.user_name().to_string();
        let log = if params.is_existing_chat() {
            ChatLog::seeded(history)
        } else {
            ChatLog::new()
        };

        let mut input = TextInput::new("").placeholder(format!("Message {user_name}..."));
        input.set_focused(true);

        Self {
            user_name,
            log,
            input,
            theme,
        }
    }

    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Messages, newest first.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        self.log.messages()
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        self.input.value()
    }

    /// Sends the draft. Blank drafts are kept and nothing is sent.
    pub fn send_message(&mut self) -> bool {
        let sent = self.log.send(self.input.value()).is_some();
        if sent {
            debug!(to = %self.user_name, count = self.log.len(), "Message added");
            self.input.clear();
        }
        sent
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DirectMessageAction {
        if EventHandler::is_back_event(&key) {
            return DirectMessageAction::Back;
        }
        if EventHandler::is_submit_event(&key) {
            self.send_message();
        } else {
            self.input.handle_key(key);
        }
        DirectMessageAction::None
    }

    fn render_messages(&self, area: Rect, buf: &mut Buffer) {
        let bubble_max = (area.width.saturating_mul(7) / 10).max(10).min(area.width);
        let mut bottom = area.bottom();

        for message in self.log.messages() {
            if bottom <= area.y {
                break;
            }
            let text_width = u16::try_from(message.text().width()).unwrap_or(u16::MAX);
            let inner_width = text_width.min(bubble_max.saturating_sub(2)).max(1);
            let width = inner_width.saturating_add(2).min(area.width);
            let bubble = Paragraph::new(message.text()).wrap(Wrap { trim: true });
            let lines = u16::try_from(bubble.line_count(inner_width)).unwrap_or(u16::MAX);
            let height = lines.max(1).min(bottom - area.y);

            let x = if message.is_own() {
                area.right().saturating_sub(width)
            } else {
                area.x
            };
            let y = bottom - height;
            let style = if message.is_own() {
                Style::default().bg(self.theme.accent).fg(Color::White)
            } else {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            };

            bubble
                .style(style)
                .block(Block::default().padding(Padding::horizontal(1)))
                .render(Rect::new(x, y, width, height), buf);

            bottom = y.saturating_sub(1);
        }
    }
}

impl Widget for &DirectMessageScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, body_area, status_area] = screen_layout(area);
        let [messages_area, input_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(3)]).areas(body_area);

        HeaderBar::new("SkillSwap", &self.user_name)
            .style(HeaderBarStyle::from_theme(&self.theme))
            .render(header_area, buf);

        self.render_messages(messages_area, buf);

        let [field_area, send_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(8)]).areas(input_area);
        (&self.input).render(field_area, buf);

        let send_style = if self.input.value().trim().is_empty() {
            self.theme.dimmed_style
        } else {
            self.theme.title_style()
        };
        Paragraph::new(vec![Line::default(), Line::from(Span::styled(" Send ", send_style))])
            .centered()
            .render(send_area, buf);

        let status = StatusBar::new()
            .key_style(self.theme.title_style())
            .hint("Enter", "send")
            .hint("Esc", "back");
        (&status).render(status_area, buf);
    }
}
