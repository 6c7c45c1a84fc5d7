use crate::themes::ThemeId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneIntent {
    /// The door was opened.
    Tap,
    ThemeChosen(ThemeId),
    SubmissionSucceeded,
    /// Return to the theme picker. Only meaningful in picker mode.
    Back,
}

impl Intent for SceneIntent {}
