use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ui::effects::EffectTimings;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub themes: ThemesConfig,
    #[serde(default)]
    pub timings: TimingsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where RSVPs are posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Form-collection URL that accepts a JSON POST.
    #[serde(default = "default_endpoint_url")]
    pub url: String,
    /// Connection timeout in seconds. Unset means the platform default.
    #[serde(default)]
    pub connect_timeout_seconds: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemesConfig {
    /// Start from the theme picker instead of the door.
    #[serde(default)]
    pub selectable: bool,
    /// Theme used when the picker is off (e.g. "perk", "garden").
    #[serde(default = "default_theme")]
    pub default: String,
}

/// Effect and toast durations, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingsConfig {
    #[serde(default = "default_validation_toast_ms")]
    pub validation_toast_ms: u64,
    #[serde(default = "default_maybe_toast_ms")]
    pub maybe_toast_ms: u64,
    #[serde(default = "default_error_toast_ms")]
    pub error_toast_ms: u64,
    #[serde(default = "default_celebration_ms")]
    pub celebration_ms: u64,
    #[serde(default = "default_redirect_ms")]
    pub redirect_ms: u64,
    /// Offsets of the staggered confetti bursts after a Yes.
    #[serde(default = "default_burst_offsets_ms")]
    pub burst_offsets_ms: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to the platform cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_endpoint_url() -> String {
    "http://127.0.0.1:8080/rsvp".to_string()
}

fn default_theme() -> String {
    "perk".to_string()
}

fn default_validation_toast_ms() -> u64 {
    2000
}

fn default_maybe_toast_ms() -> u64 {
    4000
}

fn default_error_toast_ms() -> u64 {
    3000
}

fn default_celebration_ms() -> u64 {
    2500
}

fn default_redirect_ms() -> u64 {
    2000
}

fn default_burst_offsets_ms() -> Vec<u64> {
    vec![0, 200, 400]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_endpoint_url(),
            connect_timeout_seconds: None,
        }
    }
}

impl Default for ThemesConfig {
    fn default() -> Self {
        Self {
            selectable: false,
            default: default_theme(),
        }
    }
}

impl Default for TimingsConfig {
    fn default() -> Self {
        Self {
            validation_toast_ms: default_validation_toast_ms(),
            maybe_toast_ms: default_maybe_toast_ms(),
            error_toast_ms: default_error_toast_ms(),
            celebration_ms: default_celebration_ms(),
            redirect_ms: default_redirect_ms(),
            burst_offsets_ms: default_burst_offsets_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl TimingsConfig {
    pub fn validation_toast(&self) -> Duration {
        Duration::from_millis(self.validation_toast_ms)
    }

    pub fn error_toast(&self) -> Duration {
        Duration::from_millis(self.error_toast_ms)
    }

    pub fn effects(&self) -> EffectTimings {
        EffectTimings {
            celebration: Duration::from_millis(self.celebration_ms),
            redirect: Duration::from_millis(self.redirect_ms),
            maybe_notice: Duration::from_millis(self.maybe_toast_ms),
            burst_offsets: self
                .burst_offsets_ms
                .iter()
                .copied()
                .map(Duration::from_millis)
                .collect(),
        }
    }
}
