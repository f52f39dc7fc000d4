//! Status bar widget with key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Success.
    Success,
    /// Busy.
    Busy,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Gray,
            Self::Success => Color::Green,
            Self::Busy => Color::Yellow,
        }
    }
}

/// Bottom bar: status text on the left, key hints on the right.
#[derive(Debug, Clone)]
pub struct StatusBar {
    status: String,
    level: StatusLevel,
    hints: Vec<(&'static str, &'static str)>,
    key_style: Style,
}

impl StatusBar {
    /// Creates empty status bar.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: String::new(),
            level: StatusLevel::Info,
            hints: Vec::new(),
            key_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Sets status text.
    #[must_use]
    pub fn status(mut self, content: impl Into<String>, level: StatusLevel) -> Self {
        self.status = content.into();
        self.level = level;
        self
    }

    /// Adds a key hint such as `("Enter", "send")`.
    #[must_use]
    pub fn hint(mut self, key: &'static str, label: &'static str) -> Self {
        self.hints.push((key, label));
        self
    }

    /// Sets key label style.
    #[must_use]
    pub const fn key_style(mut self, style: Style) -> Self {
        self.key_style = style;
        self
    }

    fn hint_spans(&self) -> (Vec<Span<'_>>, usize) {
        let mut spans = Vec::with_capacity(self.hints.len() * 3);
        let mut width = 0;
        for (key, label) in &self.hints {
            spans.push(Span::styled(*key, self.key_style));
            spans.push(Span::styled(
                format!(" {label}  "),
                Style::default().fg(Color::DarkGray),
            ));
            width += key.width() + label.width() + 3;
        }
        (spans, width)
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let width = usize::from(area.width);
        let status_style = Style::default()
            .fg(self.level.color())
            .add_modifier(Modifier::BOLD);

        let status_text = format!(" {}", self.status);
        let status_len = status_text.width();
        let (hint_spans, hint_len) = self.hint_spans();

        let mut spans = vec![Span::styled(status_text, status_style)];
        if status_len + hint_len <= width {
            let padding = width - status_len - hint_len;
            spans.push(Span::raw(" ".repeat(padding)));
            spans.extend(hint_spans);
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
