use crate::ui::scene::{Scene, SceneMode};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(scene: Scene, mode: SceneMode) -> &'static str {
        match (scene, mode) {
            (Scene::Landing, _) => " Enter: Open │ Esc: Quit",
            (Scene::ThemeSelect, _) => " Up/Down: Move │ Enter: Choose │ Esc: Quit",
            (Scene::InvitationForm, SceneMode::Picker) => {
                " Tab: Next │ 1/2/3: Answer │ Ctrl+S: Send │ Esc: Themes │ Ctrl+Q: Quit"
            }
            (Scene::InvitationForm, SceneMode::Door) => {
                " Tab: Next │ 1/2/3: Answer │ Ctrl+S: Send │ Ctrl+Q: Quit"
            }
            (Scene::Success, SceneMode::Picker) => " Esc: Themes │ q: Quit",
            (Scene::Success, SceneMode::Door) => " q: Quit",
        }
    }

    pub fn widget(&self, area: Rect, scene: Scene, mode: SceneMode) -> Paragraph<'static> {
        let hints = Self::hints(scene, mode);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
