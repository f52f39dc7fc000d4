//! Profile screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::utils::{initials, screen_layout};
use crate::domain::{Profile, ProfileStore};
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{HeaderBar, HeaderBarStyle, StatusBar};

const STATS: [(&str, &str); 3] = [
    ("24", "Skills Offered"),
    ("18", "Skills Learned"),
    ("4.8", "Rating"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    None,
    Edit,
    Logout,
    Back,
}

/// Read-only view of the shared profile.
pub struct ProfileScreen {
    profile: Profile,
    theme: Theme,
}

impl ProfileScreen {
    /// Takes a snapshot of the store; a remount picks up later edits.
    #[must_use]
    pub fn new(store: &ProfileStore, theme: Theme) -> Self {
        Self {
            profile: store.snapshot(),
            theme,
        }
    }

    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ProfileAction {
        if EventHandler::is_back_event(&key) {
            return ProfileAction::Back;
        }
        match key.code {
            KeyCode::Char('e') => ProfileAction::Edit,
            KeyCode::Char('l') => ProfileAction::Logout,
            _ => ProfileAction::None,
        }
    }

    fn render_identity(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                format!("( {} )", initials(self.profile.name())),
                self.theme.title_style(),
            )),
            Line::from(Span::styled(
                self.profile.name(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Joined {}", self.profile.joined_date()),
                self.theme.dimmed_style,
            )),
            Line::from(Span::styled(" Edit Profile ", self.theme.selection_style)),
        ];
        Paragraph::new(lines).centered().render(area, buf);
    }

    fn render_section(&self, title: &str, body: Vec<Line<'_>>, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(self.theme.dimmed_style)
            .title(Span::styled(format!(" {title} "), self.theme.title_style()));
        Paragraph::new(body)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_stats(&self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
        for ((value, label), column) in STATS.iter().zip(columns.iter()) {
            Paragraph::new(vec![
                Line::from(Span::styled(*value, self.theme.title_style())),
                Line::from(Span::styled(*label, self.theme.dimmed_style)),
            ])
            .centered()
            .render(*column, buf);
        }
    }
}

impl Widget for &ProfileScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, body_area, status_area] = screen_layout(area);

        HeaderBar::new("SkillSwap", "Profile")
            .detail("Logout: l")
            .style(HeaderBarStyle::from_theme(&self.theme))
            .render(header_area, buf);

        let [identity, about, skills, stats] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .horizontal_margin(2)
        .areas(body_area);

        self.render_identity(identity, buf);
        self.render_section("About Me", vec![Line::from(self.profile.bio())], about, buf);

        let mut chips = Vec::with_capacity(self.profile.skills().len() * 2);
        for skill in self.profile.skills() {
            chips.push(Span::styled(
                format!(" {skill} "),
                Style::default().bg(self.theme.accent).fg(Color::White),
            ));
            chips.push(Span::raw(" "));
        }
        self.render_section("My Skills", vec![Line::from(chips)], skills, buf);

        self.render_stats(stats, buf);

        let status = StatusBar::new()
            .key_style(self.theme.title_style())
            .hint("e", "edit profile")
            .hint("l", "logout")
            .hint("Esc", "back");
        (&status).render(status_area, buf);
    }
}
