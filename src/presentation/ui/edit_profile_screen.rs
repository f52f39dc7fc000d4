//! Edit profile screen.

use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::utils::{initials, screen_layout};
use crate::application::services::FadeDurations;
use crate::domain::Profile;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    Form, HeaderBar, HeaderBarStyle, StatusBar, SuccessBanner, TextInput,
};

const NAME: usize = 0;
const BIO: usize = 1;
const SKILLS: usize = 2;

const SAVED_MESSAGE: &str = "Profile updated successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditProfileAction {
    None,
    Save,
    ChangePicture,
    Back,
}

pub struct EditProfileScreen {
    form: Form,
    banner: Option<SuccessBanner>,
    banner_fade: FadeDurations,
    theme: Theme,
}

impl EditProfileScreen {
    /// Starts from a copy of `profile`; skills are joined with `, `.
    #[must_use]
    pub fn new(profile: &Profile, banner_fade: FadeDurations, theme: Theme) -> Self {
        let form = Form::new(vec![
            TextInput::new("Full Name").with_value(profile.name()),
            TextInput::new("Bio").with_value(profile.bio()),
            TextInput::new("Skills (comma-separated)")
                .placeholder("e.g., React, Python, UI/UX Design")
                .with_value(profile.skills_text()),
        ]);
        Self {
            form,
            banner: None,
            banner_fade,
            theme,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.form.value(NAME)
    }

    #[must_use]
    pub fn bio(&self) -> &str {
        self.form.value(BIO)
    }

    #[must_use]
    pub fn skills(&self) -> &str {
        self.form.value(SKILLS)
    }

    /// Starts the saved banner, replacing one already on screen.
    pub fn show_saved_banner(&mut self) {
        self.banner = Some(SuccessBanner::new(
            SAVED_MESSAGE,
            self.theme.success,
            self.banner_fade,
        ));
    }

    #[must_use]
    pub fn banner_message(&self) -> Option<&str> {
        self.banner.as_ref().map(SuccessBanner::message)
    }

    pub fn tick(&mut self, delta: Duration) {
        if let Some(banner) = &mut self.banner {
            banner.tick(delta);
            if banner.is_done() {
                self.banner = None;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EditProfileAction {
        if EventHandler::is_back_event(&key) {
            return EditProfileAction::Back;
        }
        if EventHandler::is_submit_event(&key) || EventHandler::is_ctrl(&key, 's') {
            return EditProfileAction::Save;
        }
        if EventHandler::is_ctrl(&key, 'p') {
            return EditProfileAction::ChangePicture;
        }

        if EventHandler::is_focus_next(&key) {
            self.form.focus_next();
        } else if EventHandler::is_focus_prev(&key) {
            self.form.focus_prev();
        } else {
            self.form.handle_edit_key(key);
        }
        EditProfileAction::None
    }
}

impl Widget for &mut EditProfileScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, body_area, status_area] = screen_layout(area);

        HeaderBar::new("SkillSwap", "Edit Profile")
            .style(HeaderBarStyle::from_theme(&self.theme))
            .render(header_area, buf);

        let [banner_area, avatar, name, bio, skills, _, button, _] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .horizontal_margin(2)
        .areas(body_area);

        Paragraph::new(vec![
            Line::from(Span::styled(
                format!("( {} )", initials(self.form.value(NAME))),
                self.theme.title_style(),
            )),
            Line::from(Span::styled(
                "Change Profile Photo (Ctrl+P)",
                self.theme.accent_style(),
            )),
        ])
        .centered()
        .render(avatar, buf);

        for (field, field_area) in self.form.visible().zip([name, bio, skills]) {
            field.render(field_area, buf);
        }

        Paragraph::new(Span::styled("[ Save Changes ]", self.theme.selection_style))
            .centered()
            .render(button, buf);

        if let Some(banner) = &mut self.banner {
            banner.render(banner_area, buf);
        }

        let status = StatusBar::new()
            .key_style(self.theme.title_style())
            .hint("Tab", "next field")
            .hint("Enter", "save")
            .hint("Ctrl+P", "photo")
            .hint("Esc", "back");
        (&status).render(status_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::CatalogPort;
    use crate::infrastructure::MockCatalog;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> EditProfileScreen {
        EditProfileScreen::new(
            &MockCatalog::new().default_profile(),
            FadeDurations::default(),
            Theme::default(),
        )
    }

    #[test]
    fn test_starts_from_profile_copy() {
        let screen = screen();
        assert_eq!(screen.name(), "Muhammad Raheel Nawaz");
        assert_eq!(
            screen.skills(),
            "React Native, Guitar, Photography, Python, UI/UX Design, Cooking"
        );
    }

    #[test]
    fn test_editing_name_field() {
        let mut screen = screen();
        for _ in 0..5 {
            screen.handle_key(key(KeyCode::Backspace));
        }
        assert_eq!(screen.name(), "Muhammad Raheel ");
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Char('!')));
        assert!(screen.bio().ends_with("others.!"));
    }

    #[test]
    fn test_action_keys() {
        let mut screen = screen();
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), EditProfileAction::Save);
        assert_eq!(
            screen.handle_key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL)),
            EditProfileAction::ChangePicture
        );
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), EditProfileAction::Back);
    }

    #[test]
    fn test_banner_dismisses_after_timeline() {
        let mut screen = screen();
        screen.show_saved_banner();
        assert_eq!(screen.banner_message(), Some("Profile updated successfully!"));

        screen.tick(Duration::from_millis(2000));
        assert!(screen.banner_message().is_some());

        screen.tick(Duration::from_millis(800));
        assert!(screen.banner_message().is_none());
    }

    #[test]
    fn test_render_with_banner() {
        let mut screen = screen();
        screen.show_saved_banner();
        screen.tick(Duration::from_millis(500));

        let area = Rect::new(0, 0, 90, 24);
        let mut buf = Buffer::empty(area);
        (&mut screen).render(area, &mut buf);

        let text: String = (0..24u16)
            .flat_map(|y| (0..90u16).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("Profile updated successfully!"));
        assert!(text.contains("Save Changes"));
    }
}
