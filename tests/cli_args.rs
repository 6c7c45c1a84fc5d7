//! Tests for CLI argument parsing against the built binary.

mod common;

use std::process::Command;

use knock_rsvp::themes::ThemeId;

fn knock_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_knock-rsvp"));
    // Keep the user's own config and logs out of the picture.
    let home = std::env::temp_dir().join("knock-rsvp-cli-tests");
    cmd.env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_CACHE_HOME", home.join("cache"));
    cmd
}

#[test]
fn test_help_lists_options() {
    let output = knock_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in [
        "--config",
        "--endpoint",
        "--theme",
        "--pick-theme",
        "--list-themes",
        "--log-file",
        "--log-level",
    ] {
        assert!(stdout.contains(flag), "missing {flag} in help");
    }
}

#[test]
fn test_list_themes_prints_catalog() {
    let output = knock_cmd()
        .arg("--list-themes")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let ids: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    let expected: Vec<&str> = ThemeId::ALL.iter().map(|id| id.as_str()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_unknown_theme_exits_with_error() {
    let output = knock_cmd()
        .arg("--theme")
        .arg("nonexistent_theme_xyz")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Theme 'nonexistent_theme_xyz' not found"));
}

#[test]
fn test_broken_config_file_exits_with_error() {
    let (_dir, path) = common::temp_config("[themes\n");
    let output = knock_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load config"));
}

#[test]
fn test_invalid_endpoint_override_exits_with_error() {
    let output = knock_cmd()
        .arg("--endpoint")
        .arg("ftp://example.com")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid configuration"));
}
