//! Create post screen.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Span,
    widgets::{Paragraph, Widget},
};

use super::utils::screen_layout;
use crate::application::dto::PostRequest;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{Form, HeaderBar, HeaderBarStyle, StatusBar, TextInput};

const TITLE: usize = 0;
const CATEGORY: usize = 1;
const DESCRIPTION: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatePostAction {
    None,
    Submit,
    Back,
}

pub struct CreatePostScreen {
    form: Form,
    theme: Theme,
}

impl CreatePostScreen {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let form = Form::new(vec![
            TextInput::new("Post Title").placeholder("e.g., Guitar Lessons for Beginners"),
            TextInput::new("Post Category (e.g., Request, Offer)")
                .placeholder("Specify the category or skill"),
            TextInput::new("Detailed Description")
                .placeholder("Describe what you are posting and the expected time commitment."),
        ]);
        Self { form, theme }
    }

    #[must_use]
    pub fn request(&self) -> PostRequest {
        PostRequest::new(
            self.form.value(TITLE),
            self.form.value(CATEGORY),
            self.form.value(DESCRIPTION),
        )
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> CreatePostAction {
        if EventHandler::is_back_event(&key) {
            return CreatePostAction::Back;
        }
        if EventHandler::is_submit_event(&key) || EventHandler::is_ctrl(&key, 's') {
            return CreatePostAction::Submit;
        }

        if EventHandler::is_focus_next(&key) {
            self.form.focus_next();
        } else if EventHandler::is_focus_prev(&key) {
            self.form.focus_prev();
        } else {
            self.form.handle_edit_key(key);
        }
        CreatePostAction::None
    }
}

impl Widget for &CreatePostScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, body_area, status_area] = screen_layout(area);

        HeaderBar::new("SkillSwap", "Create New Post")
            .style(HeaderBarStyle::from_theme(&self.theme))
            .render(header_area, buf);

        let [_, title, category, description, _, button, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .horizontal_margin(2)
        .areas(body_area);

        for (field, field_area) in self.form.visible().zip([title, category, description]) {
            field.render(field_area, buf);
        }

        Paragraph::new(Span::styled("[ Submit Post ]", self.theme.selection_style))
            .centered()
            .render(button, buf);

        let status = StatusBar::new()
            .key_style(self.theme.title_style())
            .hint("Tab", "next field")
            .hint("Enter", "submit")
            .hint("Esc", "back");
        (&status).render(status_area, buf);
    }
}
