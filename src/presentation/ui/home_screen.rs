//! Home feed screen.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use tracing::debug;

use super::utils::{initials, name_color, screen_layout};
use crate::application::services::DelayTimer;
use crate::domain::entities::SkillOffer;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{HeaderBar, HeaderBarStyle, StatusBar, StatusLevel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeAction {
    None,
    /// Open a new chat with the offer's author.
    Connect(String),
    CreatePost,
    Conversations,
    Profile,
    Back,
}

/// Skill offer feed.
pub struct HomeScreen {
    offers: Vec<SkillOffer>,
    expanded: Vec<bool>,
    selected: usize,
    refresh: DelayTimer,
    profile_name: String,
    theme: Theme,
}

impl HomeScreen {
    #[must_use]
    pub fn new(
        offers: Vec<SkillOffer>,
        profile_name: impl Into<String>,
        refresh_delay: Duration,
        theme: Theme,
    ) -> Self {
        let expanded = vec![false; offers.len()];
        Self {
            offers,
            expanded,
            selected: 0,
            refresh: DelayTimer::new(refresh_delay),
            profile_name: profile_name.into(),
            theme,
        }
    }

    #[must_use]
    pub fn offers(&self) -> &[SkillOffer] {
        &self.offers
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.offers.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Flips the details panel of card `index`.
    pub fn toggle_expanded(&mut self, index: usize) {
        if let Some(flag) = self.expanded.get_mut(index) {
            *flag = !*flag;
        }
    }

    #[must_use]
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// Starts the simulated refresh. The list itself never changes.
    pub fn refresh(&mut self) {
        debug!("Feed refresh started");
        self.refresh.start();
    }

    #[must_use]
    pub const fn is_refreshing(&self) -> bool {
        self.refresh.is_active()
    }

    pub fn tick(&mut self, delta: Duration) {
        if self.refresh.tick(delta) {
            debug!("Feed refresh finished");
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> HomeAction {
        if EventHandler::is_back_event(&key) {
            return HomeAction::Back;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_expanded(self.selected),
            KeyCode::Char('c') => {
                if let Some(offer) = self.offers.get(self.selected) {
                    return HomeAction::Connect(offer.user_name().to_string());
                }
            }
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('n') => return HomeAction::CreatePost,
            KeyCode::Char('m') => return HomeAction::Conversations,
            KeyCode::Char('p') => return HomeAction::Profile,
            _ => {}
        }

        HomeAction::None
    }

    /// Rows the card needs at `width`, borders included.
    fn card_height(&self, index: usize, width: u16) -> u16 {
        self.offers.get(index).map_or(0, |offer| {
            let rows = self
                .card(index, offer)
                .line_count(width.saturating_sub(2).max(1));
            u16::try_from(rows).unwrap_or(u16::MAX)
        })
    }

    /// First card to draw so the selected card fits in `height` rows.
    fn first_visible(&self, width: u16, height: u16) -> usize {
        let mut used = 0u16;
        let mut first = self.selected;
        for index in (0..=self.selected).rev() {
            used = used.saturating_add(self.card_height(index, width));
            if used > height && index != self.selected {
                break;
            }
            first = index;
        }
        first
    }

    fn card<'a>(&'a self, index: usize, offer: &'a SkillOffer) -> Paragraph<'a> {
        let is_selected = index == self.selected;
        let expanded = self.is_expanded(index);

        let border_style = if is_selected {
            self.theme.accent_style()
        } else {
            self.theme.dimmed_style
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        let author = Style::default()
            .fg(name_color(offer.user_name()))
            .add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("({}) ", initials(offer.user_name())), author),
                Span::styled(offer.user_name(), author),
                Span::styled(format!("  {}", offer.post_time()), self.theme.dimmed_style),
                Span::raw("  "),
                Span::styled(format!("[{}]", offer.category()), self.theme.accent_style()),
            ]),
            Line::from(Span::styled(
                offer.title(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        if expanded {
            lines.push(Line::from(offer.description()));
            lines.push(Line::default());
        }

        let toggle = if expanded {
            "▾ Hide Details"
        } else {
            "▸ View Details"
        };
        let connect_style = if is_selected {
            self.theme.selection_style
        } else {
            self.theme.accent_style()
        };
        lines.push(Line::from(vec![
            Span::styled(toggle, self.theme.accent_style()),
            Span::raw("   "),
            Span::styled(" Connect ", connect_style),
        ]));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
    }
}

impl Widget for &HomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, body_area, status_area] = screen_layout(area);

        HeaderBar::new("SkillSwap", "Available Skills")
            .detail(&self.profile_name)
            .style(HeaderBarStyle::from_theme(&self.theme))
            .render(header_area, buf);

        let mut y = body_area.y;
        let first = self.first_visible(body_area.width, body_area.height);
        for (index, offer) in self.offers.iter().enumerate().skip(first) {
            if y >= body_area.bottom() {
                break;
            }
            let height = self
                .card_height(index, body_area.width)
                .min(body_area.bottom() - y);
            let card_area = Rect::new(body_area.x, y, body_area.width, height);
            self.card(index, offer).render(card_area, buf);
            y += height;
        }

        let mut status = StatusBar::new()
            .key_style(self.theme.title_style())
            .hint("↑↓", "select")
            .hint("Space", "details")
            .hint("c", "connect")
            .hint("r", "refresh")
            .hint("n", "new post")
            .hint("m", "messages")
            .hint("p", "profile");
        if self.is_refreshing() {
            status = status.status("Refreshing...", StatusLevel::Busy);
        }
        (&status).render(status_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::CatalogPort;
    use crate::infrastructure::MockCatalog;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> HomeScreen {
        HomeScreen::new(
            MockCatalog::new().skill_offers(),
            "Muhammad Raheel Nawaz",
            Duration::from_millis(1500),
            Theme::default(),
        )
    }

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_cards_start_collapsed() {
        let screen = screen();
        assert_eq!(screen.offers().len(), 5);
        assert!((0..5).all(|i| !screen.is_expanded(i)));
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut screen = screen();
        screen.toggle_expanded(2);
        assert!(screen.is_expanded(2));
        assert!(!screen.is_expanded(1));

        screen.toggle_expanded(2);
        assert!(!screen.is_expanded(2));
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let mut screen = screen();
        screen.toggle_expanded(42);
        assert!(!screen.is_expanded(42));
    }

    #[test]
    fn test_refresh_ends_after_delay() {
        let mut screen = screen();
        let offers_before = screen.offers().to_vec();

        screen.handle_key(key(KeyCode::Char('r')));
        assert!(screen.is_refreshing());

        screen.tick(Duration::from_millis(1000));
        assert!(screen.is_refreshing());

        screen.tick(Duration::from_millis(500));
        assert!(!screen.is_refreshing());
        assert_eq!(screen.offers(), offers_before.as_slice());
    }

    #[test]
    fn test_connect_uses_selected_author() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Down));

        assert_eq!(
            screen.handle_key(key(KeyCode::Char('c'))),
            HomeAction::Connect("Maria Garcia".to_string())
        );
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Up));
        assert_eq!(screen.selected(), 0);

        for _ in 0..10 {
            screen.handle_key(key(KeyCode::Down));
        }
        assert_eq!(screen.selected(), 4);
    }

    #[test]
    fn test_navigation_keys() {
        let mut screen = screen();
        assert_eq!(screen.handle_key(key(KeyCode::Char('n'))), HomeAction::CreatePost);
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('m'))),
            HomeAction::Conversations
        );
        assert_eq!(screen.handle_key(key(KeyCode::Char('p'))), HomeAction::Profile);
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), HomeAction::Back);
    }

    #[test]
    fn test_render_shows_details_only_when_expanded() {
        let mut screen = screen();
        let area = Rect::new(0, 0, 100, 30);

        let mut buf = Buffer::empty(area);
        (&screen).render(area, &mut buf);
        let collapsed = screen_text(&buf);
        assert!(collapsed.contains("Python Tutoring for Beginners"));
        assert!(collapsed.contains("View Details"));
        assert!(!collapsed.contains("complete beginners"));

        screen.handle_key(key(KeyCode::Char(' ')));
        let mut buf = Buffer::empty(area);
        (&screen).render(area, &mut buf);
        let expanded = screen_text(&buf);
        assert!(expanded.contains("Hide Details"));
        assert!(expanded.contains("complete beginners"));
    }

    #[test]
    fn test_selected_card_scrolls_into_view() {
        let mut screen = screen();
        for _ in 0..4 {
            screen.handle_key(key(KeyCode::Down));
        }

        let area = Rect::new(0, 0, 100, 12);
        let mut buf = Buffer::empty(area);
        (&screen).render(area, &mut buf);

        assert!(screen_text(&buf).contains("Spanish Conversation Practice"));
    }

    #[test]
    fn test_narrow_cards_keep_action_row() {
        let mut screen = screen();
        let area = Rect::new(0, 0, 40, 30);

        let mut buf = Buffer::empty(area);
        (&screen).render(area, &mut buf);
        let text = screen_text(&buf);
        assert!(text.contains("Programming"));
        assert!(text.contains("Connect"));

        screen.handle_key(key(KeyCode::Char(' ')));
        let mut buf = Buffer::empty(area);
        (&screen).render(area, &mut buf);
        let text = screen_text(&buf);
        assert!(text.contains("evenings."));
        assert!(text.contains("Hide Details"));
    }

    #[test]
    fn test_card_height_follows_word_wrap() {
        let screen = screen();
        assert!(screen.card_height(0, 40) > screen.card_height(0, 100));
    }
}
