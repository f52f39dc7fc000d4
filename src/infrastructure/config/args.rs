//! Command-line overrides.

use std::path::PathBuf;

use clap::Parser;

use super::app_config::LogLevel;

#[derive(Debug, Parser)]
#[command(
    name = "skillswap",
    version,
    about = "Trade skills with other learners from your terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Read configuration from PATH instead of the default location.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append logs to PATH.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Minimum level written to the log file.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// How long the feed shows its refresh indicator.
    #[arg(long, value_name = "MS")]
    pub refresh_delay_ms: Option<u64>,

    /// Redraw interval.
    #[arg(long, value_name = "MS")]
    pub tick_rate_ms: Option<u64>,

    /// Accent color, as a name (`blue`) or hex code (`#3b82f6`).
    #[arg(long, value_name = "COLOR")]
    pub accent_color: Option<String>,
}
