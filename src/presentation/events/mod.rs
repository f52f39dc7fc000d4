//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Key classification shared by all screens.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is the global quit chord.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Checks if key is a back event.
    #[must_use]
    pub fn is_back_event(key: &KeyEvent) -> bool {
        key.code == KeyCode::Esc
    }

    /// Checks if key is a submit event.
    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            }
        )
    }

    /// Checks if key moves focus forward.
    #[must_use]
    pub fn is_focus_next(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Tab | KeyCode::Down)
            && !key.modifiers.contains(KeyModifiers::SHIFT)
    }

    /// Checks if key moves focus backward.
    #[must_use]
    pub fn is_focus_prev(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::BackTab | KeyCode::Up)
            || (key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT))
    }

    /// Checks for `Ctrl+<c>`.
    #[must_use]
    pub fn is_ctrl(key: &KeyEvent, c: char) -> bool {
        key.code == KeyCode::Char(c) && key.modifiers.contains(KeyModifiers::CONTROL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;
    use test_case::test_case;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn test_quit_events() {
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
    }

    #[test_case(KeyCode::Char('q'), KeyModifiers::NONE ; "plain_q")]
    #[test_case(KeyCode::Esc, KeyModifiers::NONE ; "escape")]
    #[test_case(KeyCode::Char('c'), KeyModifiers::NONE ; "plain_c")]
    fn test_non_quit_events(code: KeyCode, modifiers: KeyModifiers) {
        assert!(!EventHandler::is_quit_event(&make_key_event(code, modifiers)));
    }

    #[test]
    fn test_submit_event() {
        assert!(EventHandler::is_submit_event(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_submit_event(&make_key_event(
            KeyCode::Char('a'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_focus_events() {
        let tab = make_key_event(KeyCode::Tab, KeyModifiers::NONE);
        let back_tab = make_key_event(KeyCode::BackTab, KeyModifiers::SHIFT);
        let shift_tab = make_key_event(KeyCode::Tab, KeyModifiers::SHIFT);

        assert!(EventHandler::is_focus_next(&tab));
        assert!(!EventHandler::is_focus_prev(&tab));
        assert!(EventHandler::is_focus_prev(&back_tab));
        assert!(EventHandler::is_focus_prev(&shift_tab));
        assert!(!EventHandler::is_focus_next(&shift_tab));
    }

    #[test]
    fn test_ctrl_chord() {
        let key = make_key_event(KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert!(EventHandler::is_ctrl(&key, 't'));
        assert!(!EventHandler::is_ctrl(&key, 's'));
        assert!(!EventHandler::is_ctrl(
            &make_key_event(KeyCode::Char('t'), KeyModifiers::NONE),
            't'
        ));
    }
}
