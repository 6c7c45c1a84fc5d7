//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_endpoint;

use knock_rsvp::config::TimingsConfig;
use knock_rsvp::submission::{SubmitCommand, SubmitSender};
use knock_rsvp::themes::ThemeId;
use knock_rsvp::ui::app::App;
use knock_rsvp::ui::scene::{Scene, SceneState};
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::mpsc;

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- App helpers --------------------------------------------------------------

/// App in door mode, with a command channel standing in for the worker.
pub fn make_app() -> (App, mpsc::Receiver<SubmitCommand>) {
    make_app_with(SceneState::door(ThemeId::Perk))
}

pub fn make_picker_app() -> (App, mpsc::Receiver<SubmitCommand>) {
    make_app_with(SceneState::picker())
}

pub fn make_app_with(scene: SceneState) -> (App, mpsc::Receiver<SubmitCommand>) {
    let (tx, rx): (SubmitSender, _) = mpsc::channel(4);
    let mut app = App::new(scene, TimingsConfig::default());
    app.set_submit_sender(tx);
    (app, rx)
}

/// Door-mode app already past the door.
pub fn app_at_form() -> (App, mpsc::Receiver<SubmitCommand>) {
    let (mut app, rx) = make_app();
    app.open_door();
    assert_eq!(app.scene(), Scene::InvitationForm);
    (app, rx)
}
