//! Bot configuration.
//!
//! Resolution order: built-in defaults, then an optional TOML file named by
//! `FINTRACK_CONFIG`, then individual environment overrides.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fintrack_ledger::DEFAULT_WINDOW_DAYS;
use fintrack_observability::LogFormat;
use fintrack_report::PdfSettings;

pub const CONFIG_PATH_VAR: &str = "FINTRACK_CONFIG";
pub const LISTEN_ADDR_VAR: &str = "FINTRACK_LISTEN_ADDR";
pub const WINDOW_DAYS_VAR: &str = "FINTRACK_WINDOW_DAYS";
pub const FONT_PATH_VAR: &str = "FINTRACK_FONT_PATH";
pub const LOG_FORMAT_VAR: &str = "FINTRACK_LOG_FORMAT";

/// Upper bound for `window_days` (one hundred years).
pub const MAX_WINDOW_DAYS: u32 = 36_500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

impl ConfigError {
    fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            message: message.into(),
        }
    }
}

/// Bot configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the messaging-gateway webhook listens on.
    pub listen_addr: SocketAddr,

    /// Length of the `/Last30` summary window, in days.
    pub window_days: u32,

    pub log_format: LogFormat,

    /// PDF report layout and font.
    pub report: PdfSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            window_days: DEFAULT_WINDOW_DAYS,
            log_format: LogFormat::default(),
            report: PdfSettings::default(),
        }
    }
}

impl Config {
    /// Load from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load using `env` as the variable lookup.
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match env(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(&env)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file (missing keys take their defaults).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn apply_env(&mut self, env: &impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(addr) = env(LISTEN_ADDR_VAR) {
            self.listen_addr = addr
                .parse()
                .map_err(|e| ConfigError::invalid(LISTEN_ADDR_VAR, format!("{addr:?}: {e}")))?;
        }

        if let Some(days) = env(WINDOW_DAYS_VAR) {
            self.window_days = days
                .parse()
                .map_err(|e| ConfigError::invalid(WINDOW_DAYS_VAR, format!("{days:?}: {e}")))?;
        }

        if let Some(path) = env(FONT_PATH_VAR) {
            self.report.font_path = Some(PathBuf::from(path));
        }

        if let Some(format) = env(LOG_FORMAT_VAR) {
            self.log_format = format
                .parse()
                .map_err(|e| ConfigError::invalid(LOG_FORMAT_VAR, format!("{e}")))?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_days == 0 {
            return Err(ConfigError::invalid("window_days", "must be at least 1"));
        }
        if self.window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::invalid(
                "window_days",
                format!("must be at most {MAX_WINDOW_DAYS}"),
            ));
        }
        if self.report.font_size <= 0.0 {
            return Err(ConfigError::invalid("report.font_size", "must be positive"));
        }
        if self.report.line_height <= 0.0 {
            return Err(ConfigError::invalid("report.line_height", "must be positive"));
        }
        if !self.report.fits_page() {
            return Err(ConfigError::invalid(
                "report.margin",
                format!("{} leaves no room for text on an A4 page", self.report.margin),
            ));
        }
        if self.report.file_name.trim().is_empty() {
            return Err(ConfigError::invalid("report.file_name", "must not be empty"));
        }
        Ok(())
    }
}
