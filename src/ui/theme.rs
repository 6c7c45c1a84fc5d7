//! Chrome colors shared by every invitation theme. Theme-specific colors
//! live in [`crate::themes::Palette`].

use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const FOCUS_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const TOAST_INFO: Color = Color::Rgb(0x1f, 0x29, 0x37);
pub const TOAST_WARNING: Color = Color::Rgb(0xfb, 0xbf, 0x24);
pub const TOAST_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const TOAST_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const TOAST_WARNING_TEXT: Color = Color::Rgb(0x78, 0x35, 0x0f);
