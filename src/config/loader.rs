use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::config::types::Config;
use crate::themes::ThemeId;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

const MAX_BURSTS: usize = 3;

impl Config {
    /// `~/.config/knock-rsvp/config.toml` on Linux, the platform equivalent
    /// elsewhere, or the current directory when there is none.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("knock-rsvp").join("config.toml")
    }

    /// Load the default config file, or defaults when it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate an explicit config file. A missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - the endpoint is an absolute http(s) URL
    /// - the default theme exists in the catalog
    /// - toast and overlay durations are non-zero
    /// - one to three confetti bursts are configured
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.endpoint.url).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid endpoint URL '{}': {}", self.endpoint.url, e),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!("Endpoint URL must use http or https, got '{}'", url.scheme()),
            });
        }

        self.default_theme()?;

        let timings = &self.timings;
        let durations = [
            ("validation_toast_ms", timings.validation_toast_ms),
            ("maybe_toast_ms", timings.maybe_toast_ms),
            ("error_toast_ms", timings.error_toast_ms),
            ("celebration_ms", timings.celebration_ms),
            ("redirect_ms", timings.redirect_ms),
        ];
        if let Some((name, _)) = durations.iter().find(|(_, ms)| *ms == 0) {
            return Err(ConfigError::ValidationError {
                message: format!("timings.{} must be greater than zero", name),
            });
        }

        let bursts = timings.burst_offsets_ms.len();
        if bursts == 0 || bursts > MAX_BURSTS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "timings.burst_offsets_ms must list 1 to {} offsets, got {}",
                    MAX_BURSTS, bursts
                ),
            });
        }

        Ok(())
    }

    pub fn default_theme(&self) -> Result<ThemeId, ConfigError> {
        self.themes
            .default
            .parse()
            .map_err(|e: crate::themes::UnknownTheme| ConfigError::ValidationError {
                message: e.to_string(),
            })
    }
}
