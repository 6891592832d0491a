pub mod admin;

use blogmark_engine::DEFAULT_EXCERPT_LENGTH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use admin::{AdminAccess, AdminPolicy};

/// Environment variable that turns on [`AdminPolicy::dev_mode`] when set to `1`.
pub const DEV_MODE_ENV: &str = "DEV_MODE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value in config file at {config_path}: {message}")]
    InvalidValue {
        config_path: PathBuf,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum excerpt length, in chars, for listing pages.
    pub excerpt_length: usize,
    pub admin: AdminPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
            admin: AdminPolicy::default(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        if config.excerpt_length == 0 {
            return Err(ConfigError::InvalidValue {
                config_path: config_path.to_path_buf(),
                message: "excerpt_length must be at least 1".to_string(),
            });
        }

        log::debug!("loaded config from {}", config_path.display());
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads `path` (or the default location), falling back to defaults when
    /// the file is missing, then applies environment overrides.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::load_from_path(path)?,
            None => Self::load()?,
        };
        Ok(config.unwrap_or_default().with_env_overrides())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/blogmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Applies `DEV_MODE=1` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        let dev_mode = std::env::var(DEV_MODE_ENV).ok();
        self.with_dev_mode_value(dev_mode.as_deref())
    }

    fn with_dev_mode_value(mut self, value: Option<&str>) -> Self {
        if value == Some("1") {
            log::warn!("{DEV_MODE_ENV}=1: admin access checks are disabled");
            self.admin.dev_mode = true;
        }
        self
    }
}
