use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// `~/.cache/knock-rsvp/knock-rsvp.log` on Linux, the platform equivalent
/// elsewhere.
pub fn default_log_path() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache_dir.join("knock-rsvp").join("knock-rsvp.log")
}

/// Resolve the filter: `RUST_LOG` wins, then the configured level.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing into a log file.
///
/// The terminal belongs to the TUI, so nothing is ever written to stdout or
/// stderr. If the log file cannot be created, logging stays off.
pub fn init_tracing(config: &LoggingConfig) {
    let path = config.file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let Ok(file) = File::create(&path) else {
        eprintln!("Warning: Failed to create log file: {}", path.display());
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(build_filter(&config.level))
        .with(file_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_with_app_log() {
        let path = default_log_path();
        assert!(path.ends_with("knock-rsvp/knock-rsvp.log"));
    }
}
