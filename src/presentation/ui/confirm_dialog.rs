use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::utils::centered_box;
use crate::presentation::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Pending,
    Cancelled,
    Confirmed,
}

/// Two-button modal. Cancel is focused first.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    title: String,
    message: String,
    confirm_label: String,
    confirm_focused: bool,
}

impl ConfirmDialog {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        confirm_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: confirm_label.into(),
            confirm_focused: false,
        }
    }

    #[must_use]
    pub fn logout() -> Self {
        Self::new("Logout", "Are you sure you want to log out?", "Logout")
    }

    #[must_use]
    pub const fn is_confirm_focused(&self) -> bool {
        self.confirm_focused
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ConfirmOutcome {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.confirm_focused = !self.confirm_focused;
                ConfirmOutcome::Pending
            }
            KeyCode::Enter if self.confirm_focused => ConfirmOutcome::Confirmed,
            KeyCode::Enter | KeyCode::Esc => ConfirmOutcome::Cancelled,
            _ => ConfirmOutcome::Pending,
        }
    }

    /// Renders the dialog centered in `area`.
    pub fn render(&self, theme: &Theme, area: Rect, buf: &mut Buffer) {
        let width = u16::try_from(self.message.width().max(30))
            .unwrap_or(u16::MAX)
            .saturating_add(4);
        let popup = centered_box(width, 6, area);
        if popup.area() == 0 {
            return;
        }

        let (cancel_style, confirm_style) = if self.confirm_focused {
            (theme.dimmed_style, theme.selection_style)
        } else {
            (theme.selection_style, theme.dimmed_style)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent_style())
            .title(Span::styled(
                format!(" {} ", self.title),
                theme.title_style().add_modifier(Modifier::BOLD),
            ));

        let text = vec![
            Line::from(self.message.as_str()),
            Line::default(),
            Line::from(vec![
                Span::styled(" Cancel ", cancel_style),
                Span::raw("   "),
                Span::styled(format!(" {} ", self.confirm_label), confirm_style),
            ])
            .centered(),
        ];

        Clear.render(popup, buf);
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}
