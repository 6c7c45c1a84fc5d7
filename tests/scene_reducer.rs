use knock_rsvp::themes::ThemeId;
use knock_rsvp::ui::mvi::Reducer;
use knock_rsvp::ui::scene::{Scene, SceneIntent, SceneMode, SceneReducer, SceneState};

fn at(scene: Scene, mode: SceneMode, theme: Option<ThemeId>) -> SceneState {
    SceneState { scene, mode, theme }
}

#[test]
fn door_mode_starts_at_landing() {
    let state = SceneState::door(ThemeId::Perk);
    assert_eq!(state.scene, Scene::Landing);
    assert_eq!(state.theme, Some(ThemeId::Perk));
}

#[test]
fn picker_mode_starts_at_theme_select() {
    let state = SceneState::picker();
    assert_eq!(state.scene, Scene::ThemeSelect);
    assert_eq!(state.theme, None);
}

#[test]
fn tap_opens_the_door() {
    let state = SceneReducer::reduce(SceneState::door(ThemeId::Garden), SceneIntent::Tap);
    assert_eq!(state.scene, Scene::InvitationForm);
    assert_eq!(state.theme, Some(ThemeId::Garden));
}

#[test]
fn tap_outside_landing_is_ignored() {
    for scene in [Scene::ThemeSelect, Scene::InvitationForm, Scene::Success] {
        let before = at(scene, SceneMode::Picker, Some(ThemeId::Perk));
        let after = SceneReducer::reduce(before.clone(), SceneIntent::Tap);
        assert_eq!(after, before);
    }
}

#[test]
fn choosing_a_theme_opens_the_form() {
    let state = SceneReducer::reduce(
        SceneState::picker(),
        SceneIntent::ThemeChosen(ThemeId::Midnight),
    );
    assert_eq!(state.scene, Scene::InvitationForm);
    assert_eq!(state.theme, Some(ThemeId::Midnight));
}

#[test]
fn theme_choice_outside_picker_is_ignored() {
    let before = SceneState::door(ThemeId::Perk);
    let after = SceneReducer::reduce(before.clone(), SceneIntent::ThemeChosen(ThemeId::Garden));
    assert_eq!(after, before);
}

#[test]
fn success_only_from_form() {
    let form = at(Scene::InvitationForm, SceneMode::Door, Some(ThemeId::Perk));
    let state = SceneReducer::reduce(form, SceneIntent::SubmissionSucceeded);
    assert_eq!(state.scene, Scene::Success);

    let landing = SceneState::door(ThemeId::Perk);
    let state = SceneReducer::reduce(landing.clone(), SceneIntent::SubmissionSucceeded);
    assert_eq!(state, landing);
}

#[test]
fn success_is_terminal_in_door_mode() {
    let success = at(Scene::Success, SceneMode::Door, Some(ThemeId::Perk));
    for intent in [
        SceneIntent::Tap,
        SceneIntent::Back,
        SceneIntent::SubmissionSucceeded,
        SceneIntent::ThemeChosen(ThemeId::Garden),
    ] {
        let state = SceneReducer::reduce(success.clone(), intent);
        assert_eq!(state, success);
    }
}

#[test]
fn back_in_door_mode_is_noop() {
    let form = at(Scene::InvitationForm, SceneMode::Door, Some(ThemeId::Perk));
    let state = SceneReducer::reduce(form.clone(), SceneIntent::Back);
    assert_eq!(state, form);
}

#[test]
fn back_returns_to_picker_from_form_and_success() {
    for scene in [Scene::InvitationForm, Scene::Success] {
        let state = SceneReducer::reduce(
            at(scene, SceneMode::Picker, Some(ThemeId::Garden)),
            SceneIntent::Back,
        );
        assert_eq!(state, SceneState::picker());
    }
}

#[test]
fn back_on_picker_stays_put() {
    let state = SceneReducer::reduce(SceneState::picker(), SceneIntent::Back);
    assert_eq!(state, SceneState::picker());
}
