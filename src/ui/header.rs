use crate::themes::ThemeProfile;
use crate::ui::scene::Scene;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, scene: Scene, profile: &ThemeProfile) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let accent_style = Style::default().fg(profile.palette.accent);
        let step = match scene {
            Scene::Landing => "At the door",
            Scene::ThemeSelect => "Pick an invitation",
            Scene::InvitationForm => "RSVP",
            Scene::Success => "Sent",
        };
        let theme_name = match scene {
            Scene::ThemeSelect => "knock-rsvp",
            _ => profile.display_name,
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("✉", accent_style),
            Span::styled("  ", text_style),
            Span::styled(theme_name, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(step, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
