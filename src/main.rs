use anyhow::Context;
use clap::Parser;

use knock_rsvp::args::Cli;
use knock_rsvp::config::Config;
use knock_rsvp::themes::{self, ThemeId};
use knock_rsvp::ui::scene::SceneState;
use knock_rsvp::{logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list_themes {
        for profile in themes::catalog() {
            println!("{:<10} {}", profile.id.as_str(), profile.display_name);
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };
    cli.apply(&mut config);

    let theme = match config.themes.default.parse::<ThemeId>() {
        Ok(theme) => theme,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    config.validate().context("invalid configuration")?;

    logging::init_tracing(&config.logging);
    tracing::info!(
        target: "startup",
        theme = %theme,
        picker = config.themes.selectable,
        endpoint = %config.endpoint.url,
        "config loaded"
    );

    let scene = if config.themes.selectable {
        SceneState::picker()
    } else {
        SceneState::door(theme)
    };
    ui::run(&config, scene)
}
