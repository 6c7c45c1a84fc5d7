pub mod app;
pub mod effects;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod scene;
pub mod terminal_guard;
pub mod theme;
pub mod toast;

pub use runtime::run;
