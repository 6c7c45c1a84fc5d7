use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Parser, Debug, Default)]
#[command(name = "knock-rsvp", version, about = "Knock on the door, answer the invitation")]
pub struct Cli {
    /// Path to a config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the submission endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Invitation theme to open with
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Start at the theme picker instead of the door
    #[arg(long)]
    pub pick_theme: bool,

    /// Print the available themes and exit
    #[arg(long)]
    pub list_themes: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `knock_rsvp=trace`
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Fold command-line overrides into a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.endpoint {
            config.endpoint.url = url.clone();
        }
        if let Some(theme) = &self.theme {
            config.themes.default = theme.clone();
        }
        if self.pick_theme {
            config.themes.selectable = true;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
    }
}
