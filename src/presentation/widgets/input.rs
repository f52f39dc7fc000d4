//! Text input widget.

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use zeroize::Zeroize;

/// Single-line text input field widget.
///
/// The cursor counts characters, not bytes.
#[derive(Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    focused: bool,
    masked: bool,
    placeholder: String,
    label: String,
}

impl TextInput {
    /// Creates new input with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            masked: false,
            placeholder: String::new(),
            label: label.into(),
        }
    }

    /// Enables password masking.
    #[must_use]
    pub fn password(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets initial value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Sets value and moves cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_count();
    }

    /// Clears value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Overwrites the buffer with zeroes and clears it.
    pub fn wipe(&mut self) {
        self.value.zeroize();
        self.cursor = 0;
    }

    /// Inserts character at cursor.
    pub fn input_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes character before cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Deletes character at cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Moves cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Moves cursor to start.
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Applies an editing key. Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => self.input_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_start(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn display_text(&self) -> String {
        if self.value.is_empty() {
            self.placeholder.clone()
        } else if self.masked {
            "•".repeat(self.char_count())
        } else {
            self.value.clone()
        }
    }
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("label", &self.label)
            .field("value", &self.display_text())
            .field("cursor", &self.cursor)
            .field("focused", &self.focused)
            .field("masked", &self.masked)
            .finish_non_exhaustive()
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let text_style = if self.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        let width = usize::from(inner.width);
        if width == 0 {
            return;
        }

        // Scroll so the cursor stays inside the field.
        let offset = if self.value.is_empty() {
            0
        } else {
            self.cursor.saturating_sub(width - 1)
        };
        let visible: String = self.display_text().chars().skip(offset).collect();
        Paragraph::new(visible).style(text_style).render(inner, buf);

        if self.focused {
            let column = u16::try_from(self.cursor - offset).unwrap_or(u16::MAX);
            let cursor_x = inner.x.saturating_add(column);
            if cursor_x < inner.x + inner.width {
                buf[(cursor_x, inner.y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_text_input_basic() {
        let mut input = TextInput::new("Test");
        assert!(input.value().is_empty());

        input.input_char('a');
        input.input_char('b');
        assert_eq!(input.value(), "ab");

        input.backspace();
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new("Name").with_value("José");
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "Joé");

        input.move_start();
        input.input_char('¡');
        assert_eq!(input.value(), "¡Joé");
    }

    #[test]
    fn test_masked_display() {
        let mut input = TextInput::new("Password").password();
        input.set_value("secret");

        assert_eq!(input.display_text(), "••••••");
    }

    #[test]
    fn test_debug_masks_password_value() {
        let secret = TextInput::new("Password").password().with_value("12345");
        let plain = TextInput::new("Email").with_value("test@student.com");

        assert!(!format!("{secret:?}").contains("12345"));
        assert!(format!("{plain:?}").contains("test@student.com"));
    }

    #[test]
    fn test_handle_key_ignores_control_chords() {
        let mut input = TextInput::new("Email");
        assert!(input.handle_key(key(KeyCode::Char('x'))));
        assert!(!input.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)));
        assert!(!input.handle_key(key(KeyCode::Enter)));
        assert_eq!(input.value(), "x");
    }

    #[test]
    fn test_wipe_clears_value() {
        let mut input = TextInput::new("Password").with_value("12345");
        input.wipe();
        assert!(input.value().is_empty());
        input.input_char('a');
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let input = TextInput::new("Bio").with_value("abcdefghij");
        let mut focused = input.clone();
        focused.set_focused(true);

        let area = Rect::new(0, 0, 7, 3);
        let mut buf = Buffer::empty(area);
        (&focused).render(area, &mut buf);

        let row: String = (1..6u16).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(row, "ghij ");
    }
}
