//! Transient banner that fades in, holds and fades out.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};
use unicode_width::UnicodeWidthStr;

use crate::application::services::{FadeDurations, FadeTimeline};

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

pub struct SuccessBanner {
    message: String,
    color: Color,
    timeline: FadeTimeline,
    effect: Effect,
    pending_duration: Duration,
}

impl SuccessBanner {
    #[must_use]
    pub fn new(message: impl Into<String>, color: Color, durations: FadeDurations) -> Self {
        let effect = fx::sequence(&[
            fx::fade_from_fg(
                Color::Black,
                (millis(durations.fade_in), Interpolation::QuadOut),
            ),
            fx::sleep((millis(durations.hold), Interpolation::Linear)),
            fx::fade_to_fg(
                Color::Black,
                (millis(durations.fade_out), Interpolation::QuadIn),
            ),
        ]);

        Self {
            message: message.into(),
            color,
            timeline: FadeTimeline::new(durations),
            effect,
            pending_duration: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tick(&mut self, delta: Duration) {
        self.timeline.tick(delta);
        self.pending_duration = self.pending_duration.saturating_add(delta);
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.timeline.is_done()
    }
}

impl Widget for &mut SuccessBanner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.is_done() || area.width < 4 || area.height < 3 {
            return;
        }

        let width = u16::try_from(self.message.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(area.width);
        let x = area.x + (area.width - width) / 2;
        let banner_area = Rect::new(x, area.y, width, 3);

        Clear.render(banner_area, buf);
        Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(self.color)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.color)),
            )
            .render(banner_area, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;
        self.effect.process(duration.into(), buf, banner_area);
    }
}
