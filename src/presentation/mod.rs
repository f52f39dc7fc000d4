//! Presentation layer with screens, widgets and key handling.

/// Key classification.
pub mod events;
/// Color theme.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
