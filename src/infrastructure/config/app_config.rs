//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::services::FadeDurations;

pub(super) const APP_NAME: &str = "skillswap";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "skillswap";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// UI timing configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// UI timing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Duration of the simulated feed refresh.
    #[serde(default = "default_refresh_delay_ms")]
    pub refresh_delay_ms: u64,

    /// Fade-in time of the profile saved banner.
    #[serde(default = "default_banner_fade_in_ms")]
    pub banner_fade_in_ms: u64,

    /// Time the profile saved banner stays fully visible.
    #[serde(default = "default_banner_hold_ms")]
    pub banner_hold_ms: u64,

    /// Fade-out time of the profile saved banner.
    #[serde(default = "default_banner_fade_out_ms")]
    pub banner_fade_out_ms: u64,

    /// Redraw interval for timers and animations.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_delay_ms: default_refresh_delay_ms(),
            banner_fade_in_ms: default_banner_fade_in_ms(),
            banner_hold_ms: default_banner_hold_ms(),
            banner_fade_out_ms: default_banner_fade_out_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiConfig {
    /// Returns refresh delay.
    #[must_use]
    pub const fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    /// Returns banner fade timeline.
    #[must_use]
    pub const fn banner_fade(&self) -> FadeDurations {
        FadeDurations {
            fade_in: Duration::from_millis(self.banner_fade_in_ms),
            hold: Duration::from_millis(self.banner_hold_ms),
            fade_out: Duration::from_millis(self.banner_fade_out_ms),
        }
    }

    /// Returns tick interval, never below one millisecond.
    #[must_use]
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

/// Theme configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

fn default_accent_color() -> String {
    "#3b82f6".to_string()
}

const fn default_refresh_delay_ms() -> u64 {
    1500
}

const fn default_banner_fade_in_ms() -> u64 {
    300
}

const fn default_banner_hold_ms() -> u64 {
    2000
}

const fn default_banner_fade_out_ms() -> u64 {
    500
}

const fn default_tick_rate_ms() -> u64 {
    33
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(refresh_delay_ms) = args.refresh_delay_ms {
            self.ui.refresh_delay_ms = refresh_delay_ms;
        }
        if let Some(tick_rate_ms) = args.tick_rate_ms {
            self.ui.tick_rate_ms = tick_rate_ms;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("skillswap.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            log_level = "debug"

            [ui]
            refresh_delay_ms = 250

            [theme]
            accent_color = "Magenta"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.ui.refresh_delay(), Duration::from_millis(250));
        assert_eq!(config.ui.banner_hold_ms, 2000);
        assert_eq!(config.theme.accent_color, "Magenta");
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.ui.refresh_delay(), Duration::from_millis(1500));
        assert_eq!(config.ui.banner_fade(), FadeDurations::default());
        assert_eq!(config.theme.accent_color, "#3b82f6");
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config: AppConfig = toml::from_str("[ui]\nrefresh_delay_ms = 250").unwrap();
        let args = CliArgs::parse_from([
            "skillswap",
            "--refresh-delay-ms",
            "10",
            "--log-level",
            "warn",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.ui.refresh_delay_ms, 10);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.theme.accent_color, "#3b82f6");
    }

    #[test]
    fn test_tick_rate_never_zero() {
        let ui = UiConfig {
            tick_rate_ms: 0,
            ..UiConfig::default()
        };
        assert_eq!(ui.tick_rate(), Duration::from_millis(1));
    }
}
