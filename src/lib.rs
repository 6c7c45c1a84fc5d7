pub mod args;
pub mod config;
pub mod logging;
pub mod submission;
pub mod themes;
pub mod ui;
