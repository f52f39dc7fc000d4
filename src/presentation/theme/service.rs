use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub selection_style: Style,
    pub dimmed_style: Style,
    pub success: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("#3b82f6")
    }
}

impl Theme {
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            selection_style: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(Color::DarkGray),
            success: Color::Green,
            error: Color::Red,
        }
    }

    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    #[must_use]
    pub fn title_style(&self) -> Style {
        self.accent_style().add_modifier(Modifier::BOLD)
    }
}

/// Color used when the configured accent cannot be parsed.
const FALLBACK_ACCENT: Color = Color::Blue;

/// Accepts ratatui color names, indexed colors, `#rrggbb` and `#rgb`.
fn parse_color(s: &str) -> Color {
    let s = s.trim();
    Color::from_str(s)
        .ok()
        .or_else(|| expand_short_hex(s).and_then(|hex| Color::from_str(&hex).ok()))
        .unwrap_or(FALLBACK_ACCENT)
}

fn expand_short_hex(s: &str) -> Option<String> {
    let digits = s.strip_prefix('#')?;
    if digits.len() != 3 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(std::iter::once('#').chain(digits.chars().flat_map(|c| [c, c])).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#3b82f6"), Color::Rgb(59, 130, 246));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color(" magenta "), Color::Magenta);
        assert_eq!(parse_color("Invalid"), Color::Blue);
        assert_eq!(parse_color("#12"), Color::Blue);
    }

    #[test]
    fn test_selection_uses_accent() {
        let theme = Theme::new("Magenta");
        assert_eq!(theme.selection_style.bg, Some(Color::Magenta));
    }
}
