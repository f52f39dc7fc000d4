//! Login screen.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::application::dto::{LoginRequest, SignupRequest};
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{Form, TextInput};

const FULL_NAME: usize = 0;
const EMAIL: usize = 1;
const PASSWORD: usize = 2;
const CONFIRM_PASSWORD: usize = 3;

/// Which form the screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    const fn field_order(self) -> &'static [usize] {
        match self {
            Self::Login => &[EMAIL, PASSWORD],
            Self::Signup => &[FULL_NAME, EMAIL, PASSWORD, CONFIRM_PASSWORD],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Submit,
    Quit,
}

/// Login screen UI.
pub struct LoginScreen {
    form: Form,
    mode: AuthMode,
    theme: Theme,
}

impl LoginScreen {
    /// Creates new login screen.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let form = Form::new(vec![
            TextInput::new("Full Name").placeholder("Enter your full name"),
            TextInput::new("Email").placeholder("Enter your email"),
            TextInput::new("Password")
                .password()
                .placeholder("Enter your password"),
            TextInput::new("Confirm Password")
                .password()
                .placeholder("Confirm your password"),
        ]);

        let mut screen = Self {
            form,
            mode: AuthMode::Login,
            theme,
        };
        screen.set_mode(AuthMode::Login);
        screen
    }

    /// Returns current mode.
    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Switches the visible form.
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.form.set_order(mode.field_order().to_vec());
    }

    pub fn toggle_mode(&mut self) {
        let next = match self.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        self.set_mode(next);
    }

    /// Builds the sign-in request from the form.
    #[must_use]
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest::new(self.form.value(EMAIL), self.form.value(PASSWORD))
    }

    /// Builds the account creation request from the form.
    #[must_use]
    pub fn signup_request(&self) -> SignupRequest {
        SignupRequest::new(
            self.form.value(FULL_NAME),
            self.form.value(EMAIL),
            self.form.value(PASSWORD),
            self.form.value(CONFIRM_PASSWORD),
        )
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        if EventHandler::is_back_event(&key) {
            return LoginAction::Quit;
        }
        if EventHandler::is_submit_event(&key) {
            return LoginAction::Submit;
        }
        if EventHandler::is_ctrl(&key, 't') {
            self.toggle_mode();
        } else if EventHandler::is_focus_next(&key) {
            self.form.focus_next();
        } else if EventHandler::is_focus_prev(&key) {
            self.form.focus_prev();
        } else {
            self.form.handle_edit_key(key);
        }

        LoginAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let field_count = u16::try_from(self.mode.field_order().len()).unwrap_or(0);
        let card_height = 2 + 2 + field_count * 3 + 5;

        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(card_height),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(50),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.accent_style())
            .title(Span::styled(" SkillSwap ", self.theme.title_style()));

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let subtitle = match self.mode {
            AuthMode::Login => "Welcome back!",
            AuthMode::Signup => "Create an account",
        };

        let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
        constraints.extend(self.form.visible().map(|_| Constraint::Length(3)));
        constraints.extend([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let rows = Layout::vertical(constraints).split(inner);

        Paragraph::new(subtitle)
            .style(Style::default().fg(Color::White))
            .centered()
            .render(rows[0], buf);

        let mut row = 2;
        for field in self.form.visible() {
            field.render(rows[row], buf);
            row += 1;
        }

        let button = match self.mode {
            AuthMode::Login => "[ Log In ]",
            AuthMode::Signup => "[ Sign Up ]",
        };
        Paragraph::new(Span::styled(button, self.theme.selection_style))
            .centered()
            .render(rows[row + 1], buf);

        let switch = match self.mode {
            AuthMode::Login => "Don't have an account? Sign Up",
            AuthMode::Signup => "Already have an account? Log In",
        };
        Paragraph::new(Line::from(vec![
            Span::styled(switch, self.theme.accent_style()),
            Span::styled(" (Ctrl+T)", self.theme.dimmed_style),
        ]))
        .centered()
        .render(rows[row + 2], buf);

        if self.mode == AuthMode::Login {
            Paragraph::new(Span::styled(
                "Forgot Password?",
                self.theme.dimmed_style.add_modifier(Modifier::ITALIC),
            ))
            .centered()
            .render(rows[row + 3], buf);
        }

        let hints = Line::from(vec![
            Span::styled("Enter: Submit", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Tab: Next Field", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Esc: Quit", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(hints).centered().render(rows[row + 4], buf);
    }
}

impl Drop for LoginScreen {
    fn drop(&mut self) {
        self.form.wipe();
    }
}

impl Widget for &LoginScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(screen: &mut LoginScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
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
    fn test_initial_state() {
        let screen = LoginScreen::new(Theme::default());
        assert_eq!(screen.mode(), AuthMode::Login);
        assert!(screen.login_request().has_empty_field());
    }

    #[test]
    fn test_typing_fills_email_then_password() {
        let mut screen = LoginScreen::new(Theme::default());
        type_str(&mut screen, "test@student.com");
        screen.handle_key(key(KeyCode::Tab));
        type_str(&mut screen, "12345");

        let request = screen.login_request();
        assert_eq!(request.email, "test@student.com");
        assert_eq!(request.password, "12345");
    }

    #[test]
    fn test_submit_and_quit_actions() {
        let mut screen = LoginScreen::new(Theme::default());
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::Submit);
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), LoginAction::Quit);
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('a'))),
            LoginAction::None
        );
    }

    #[test]
    fn test_toggle_mode_shows_signup_fields() {
        let mut screen = LoginScreen::new(Theme::default());
        let toggle = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);

        screen.handle_key(toggle);
        assert_eq!(screen.mode(), AuthMode::Signup);

        type_str(&mut screen, "Ann");
        for _ in 0..3 {
            screen.handle_key(key(KeyCode::Tab));
            type_str(&mut screen, "x");
        }

        let request = screen.signup_request();
        assert_eq!(request.full_name, "Ann");
        assert_eq!(request.email, "x");
        assert!(request.passwords_match());

        screen.handle_key(toggle);
        assert_eq!(screen.mode(), AuthMode::Login);
        assert_eq!(screen.login_request().email, "x");
    }

    #[test]
    fn test_password_is_masked_on_screen() {
        let mut screen = LoginScreen::new(Theme::default());
        screen.handle_key(key(KeyCode::Tab));
        type_str(&mut screen, "hunter2");

        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        (&screen).render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains("Welcome back!"));
        assert!(text.contains("•••••••"));
        assert!(!text.contains("hunter2"));
    }
}
