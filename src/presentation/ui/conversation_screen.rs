//! Conversation list screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, StatefulWidget, Widget},
};

use super::utils::{initials, name_color, screen_layout};
use crate::domain::entities::Conversation;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{HeaderBar, HeaderBarStyle, StatusBar};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationAction {
    None,
    /// Open the existing chat with this contact.
    Open(String),
    Back,
}

pub struct ConversationScreen {
    conversations: Vec<Conversation>,
    selected: usize,
    theme: Theme,
}

impl ConversationScreen {
    #[must_use]
    pub fn new(conversations: Vec<Conversation>, theme: Theme) -> Self {
        Self {
            conversations,
            selected: 0,
            theme,
        }
    }

    #[must_use]
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Conversation> {
        self.conversations.get(self.selected)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ConversationAction {
        if EventHandler::is_back_event(&key) {
            return ConversationAction::Back;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.conversations.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Enter => {
                if let Some(conversation) = self.selected() {
                    return ConversationAction::Open(conversation.name().to_string());
                }
            }
            _ => {}
        }

        ConversationAction::None
    }

    fn item<'a>(&self, conversation: &'a Conversation) -> ListItem<'a> {
        let name_style = Style::default()
            .fg(name_color(conversation.name()))
            .add_modifier(Modifier::BOLD);

        let mut first = vec![
            Span::styled(format!("({}) ", initials(conversation.name())), name_style),
            Span::styled(conversation.name(), name_style),
            Span::styled(format!("  {}", conversation.time()), self.theme.dimmed_style),
        ];
        if conversation.has_unread() {
            first.push(Span::raw("  "));
            first.push(Span::styled(
                format!(" {} ", conversation.unread_count()),
                Style::default()
                    .bg(self.theme.accent)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        ListItem::new(vec![
            Line::from(first),
            Line::from(Span::styled(
                format!("     {}", conversation.last_message()),
                self.theme.dimmed_style,
            )),
            Line::default(),
        ])
    }
}

impl Widget for &ConversationScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, body_area, status_area] = screen_layout(area);

        HeaderBar::new("SkillSwap", "Messages")
            .style(HeaderBarStyle::from_theme(&self.theme))
            .render(header_area, buf);

        let items: Vec<ListItem<'_>> = self
            .conversations
            .iter()
            .map(|conversation| self.item(conversation))
            .collect();
        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▌");
        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, body_area, buf, &mut state);

        let status = StatusBar::new()
            .key_style(self.theme.title_style())
            .hint("↑↓", "select")
            .hint("Enter", "open")
            .hint("Esc", "back");
        (&status).render(status_area, buf);
    }
}
