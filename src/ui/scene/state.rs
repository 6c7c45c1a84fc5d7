use crate::themes::ThemeId;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    #[default]
    Landing,
    ThemeSelect,
    InvitationForm,
    Success,
}

/// Whether the session starts from the door or from the theme picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneMode {
    /// One fixed theme; `Success` is terminal.
    #[default]
    Door,
    /// Theme picker first; `Back` returns to it from the form or success.
    Picker,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneState {
    pub scene: Scene,
    pub mode: SceneMode,
    /// Always set in door mode. In picker mode, set only after a choice.
    pub theme: Option<ThemeId>,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::door(ThemeId::Perk)
    }
}

impl UiState for SceneState {}

impl SceneState {
    pub fn door(theme: ThemeId) -> Self {
        Self {
            scene: Scene::Landing,
            mode: SceneMode::Door,
            theme: Some(theme),
        }
    }

    pub fn picker() -> Self {
        Self {
            scene: Scene::ThemeSelect,
            mode: SceneMode::Picker,
            theme: None,
        }
    }

    pub fn is(&self, scene: Scene) -> bool {
        self.scene == scene
    }
}
