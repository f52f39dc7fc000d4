use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub title: Style,
    pub detail: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            title: theme.title_style(),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            title: Style::default().add_modifier(Modifier::BOLD),
            detail: Style::default().fg(Color::DarkGray),
        }
    }
}

/// One-line screen header: app badge, screen title and a right-aligned detail.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    title: &'a str,
    detail: Option<&'a str>,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, title: &'a str) -> Self {
        Self {
            app_name,
            title,
            detail: None,
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn detail(mut self, detail: &'a str) -> Self {
        self.detail = Some(detail);
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let badge = format!(" {} ", self.app_name);
        let left_width = u16::try_from(badge.width() + 1 + self.title.width()).unwrap_or(u16::MAX);
        let left_line = Line::from(vec![
            Span::styled(badge, self.style.app_name),
            Span::raw(" "),
            Span::styled(self.title, self.style.title),
        ]);
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        if let Some(detail) = self.detail {
            let text = format!("{detail} ");
            let detail_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            if detail_width < area.width.saturating_sub(left_width + 1) {
                let right_x = area.right().saturating_sub(detail_width);
                let right_area = Rect::new(right_x, area.y, detail_width, 1);
                Paragraph::new(Span::styled(text, self.style.detail)).render(right_area, buf);
            }
        }
    }
}
