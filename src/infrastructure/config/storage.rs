//! Configuration file storage.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no configuration directory available on this platform")]
    NoConfigDir,
    #[error("config file io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Where a loaded configuration came from.
///
/// The caller logs it with [`ConfigSource::log`] once a subscriber is installed.
#[derive(Debug)]
pub enum ConfigSource {
    /// Parsed from an existing file.
    File(PathBuf),
    /// File was missing; defaults were written to it.
    CreatedDefault(PathBuf),
    /// File did not parse; defaults are used and the file is left untouched.
    Malformed { path: PathBuf, error: toml::de::Error },
}

impl ConfigSource {
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Emits the outcome through `tracing`.
    pub fn log(&self) {
        match self {
            Self::File(path) => info!(path = %path.display(), "Config loaded"),
            Self::CreatedDefault(path) => info!(path = %path.display(), "Wrote default config"),
            Self::Malformed { path, error } => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Malformed config, using defaults"
                );
            }
        }
    }
}

/// Reads and writes `config.toml` under the platform config directory.
#[derive(Debug, Clone)]
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// # Errors
    /// Returns `NoConfigDir` when the platform has no home directory.
    pub fn new() -> Result<Self, ConfigError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| Self::with_dir(dirs.config_dir().to_path_buf()))
            .ok_or(ConfigError::NoConfigDir)
    }

    #[must_use]
    pub const fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Returns the file a load would read, honoring `--config`.
    #[must_use]
    pub fn config_path(&self, path_override: Option<&Path>) -> PathBuf {
        path_override.map_or_else(|| self.config_dir.join(CONFIG_FILE_NAME), Path::to_path_buf)
    }

    /// Loads the configuration.
    ///
    /// A missing file is created with defaults. A file that does not parse is
    /// left as is and defaults are returned.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or the default cannot be written.
    pub fn load_config(
        &self,
        path_override: Option<&Path>,
    ) -> Result<(AppConfig, ConfigSource), ConfigError> {
        let path = self.config_path(path_override);

        if !path.exists() {
            let config = AppConfig::default();
            Self::save_config(&path, &config)?;
            return Ok((config, ConfigSource::CreatedDefault(path)));
        }

        let content = fs::read_to_string(&path)?;
        Ok(match toml::from_str(&content) {
            Ok(config) => (config, ConfigSource::File(path)),
            Err(error) => (AppConfig::default(), ConfigSource::Malformed { path, error }),
        })
    }

    /// Writes `config` to `path` through a temp file in the same directory.
    ///
    /// # Errors
    /// Returns error if serialization or any file operation fails.
    pub fn save_config(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(config)?;

        let dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        temp.write_all(content.as_bytes())?;
        temp.persist(path).map_err(|e| e.error)?;

        debug!(path = %path.display(), "Config saved");
        Ok(())
    }
}
