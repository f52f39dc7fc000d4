//! Infrastructure layer with configuration and local adapters.

/// Application configuration.
pub mod config;
/// Built-in credential check.
pub mod fixed_credentials;
/// Built-in sample data.
pub mod mock_catalog;

pub use config::{
    AppConfig, CliArgs, ConfigError, ConfigSource, LogLevel, StorageManager,
};
pub use fixed_credentials::FixedCredentialAuth;
pub use mock_catalog::MockCatalog;
