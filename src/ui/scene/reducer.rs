use crate::ui::mvi::Reducer;
use crate::ui::scene::intent::SceneIntent;
use crate::ui::scene::state::{Scene, SceneMode, SceneState};

pub struct SceneReducer;

impl Reducer for SceneReducer {
    type State = SceneState;
    type Intent = SceneIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state.scene, intent) {
            (Scene::Landing, SceneIntent::Tap) => SceneState {
                scene: Scene::InvitationForm,
                ..state
            },
            (Scene::ThemeSelect, SceneIntent::ThemeChosen(id)) => SceneState {
                scene: Scene::InvitationForm,
                theme: Some(id),
                ..state
            },
            (Scene::InvitationForm, SceneIntent::SubmissionSucceeded) => SceneState {
                scene: Scene::Success,
                ..state
            },
            (Scene::InvitationForm | Scene::Success, SceneIntent::Back)
                if state.mode == SceneMode::Picker =>
            {
                SceneState::picker()
            }
            _ => state,
        }
    }
}
