use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::utils::centered_box;
use crate::domain::{Notice, NoticeLevel};
use crate::presentation::theme::Theme;

const MAX_WIDTH: u16 = 60;
const OK_HINT: &str = "[ OK ]  Enter";

/// Centered modal for the notice at the head of the queue.
pub struct NoticeDialog<'a> {
    notice: &'a Notice,
    theme: &'a Theme,
}

impl<'a> NoticeDialog<'a> {
    #[must_use]
    pub fn new(notice: &'a Notice, theme: &'a Theme) -> Self {
        Self { notice, theme }
    }
}

impl Widget for NoticeDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.notice.title);
        let message = &self.notice.message;

        let max_popup_width = MAX_WIDTH.min(area.width.saturating_sub(2));
        let width = u16::try_from(message.width())
            .unwrap_or(u16::MAX)
            .max(u16::try_from(title.width()).unwrap_or(0))
            .max(u16::try_from(OK_HINT.width()).unwrap_or(0))
            .saturating_add(4)
            .min(max_popup_width);

        let inner_width = width.saturating_sub(2).max(1);
        let content_width = u16::try_from(message.width()).unwrap_or(0);
        let lines = content_width.div_ceil(inner_width).max(1);
        let height = lines.saturating_add(4).min(12);

        let popup_area = centered_box(width, height, area);
        if popup_area.area() == 0 {
            return;
        }

        let color = match self.notice.level {
            NoticeLevel::Info => self.theme.accent,
            NoticeLevel::Success => self.theme.success,
            NoticeLevel::Error => self.theme.error,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(color));

        let mut text = vec![Line::from(message.as_str()), Line::default()];
        text.push(Line::from(Span::styled(OK_HINT, self.theme.dimmed_style)).right_aligned());

        Clear.render(popup_area, buf);
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(popup_area, buf);
    }
}
