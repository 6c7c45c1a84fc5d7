use std::time::{Duration, Instant};

use crate::config::TimingsConfig;
use crate::submission::{Dispatch, SubmissionReport, SubmissionWorkflow, SubmitError, SubmitSender};
use crate::themes::{self, ThemeId, ThemeProfile};
use crate::ui::effects::{ConfettiField, OverlayFlags, SelectionEffects};
use crate::ui::form::{FormIntent, FormReducer, RsvpChoice, RsvpForm, RsvpStatus};
use crate::ui::mvi::Reducer;
use crate::ui::scene::{Scene, SceneIntent, SceneMode, SceneReducer, SceneState};
use crate::ui::toast::{Toast, ToastIntent, ToastKind, ToastReducer, ToastState};

/// Focusable controls of the invitation form, top to bottom.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormField {
    Name,
    Guests,
    Option(RsvpChoice),
    Submit,
}

const FIELD_ORDER: [FormField; 6] = [
    FormField::Name,
    FormField::Guests,
    FormField::Option(RsvpChoice::Yes),
    FormField::Option(RsvpChoice::Maybe),
    FormField::Option(RsvpChoice::No),
    FormField::Submit,
];

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// One invitation session. Owns every piece of state; the renderer only
/// reads it through the accessors below.
pub struct App {
    should_quit: bool,
    scene: SceneState,
    form: RsvpForm,
    toast: ToastState,
    effects: SelectionEffects,
    /// Particle engine, fed by `effects`.
    confetti: ConfettiField,
    submission: SubmissionWorkflow,
    timings: TimingsConfig,
    focus: FormField,
    /// Highlighted row of the theme picker.
    theme_cursor: usize,
    size: Option<(u16, u16)>,
}

impl App {
    pub fn new(scene: SceneState, timings: TimingsConfig) -> Self {
        let effects = SelectionEffects::new(timings.effects());
        let theme_cursor = scene
            .theme
            .and_then(|id| ThemeId::ALL.iter().position(|t| *t == id))
            .unwrap_or(0);
        Self {
            should_quit: false,
            scene,
            form: RsvpForm::default(),
            toast: ToastState::default(),
            effects,
            confetti: ConfettiField::default(),
            submission: SubmissionWorkflow::new(None),
            timings,
            focus: FormField::Name,
            theme_cursor,
            size: None,
        }
    }

    pub fn set_submit_sender(&mut self, sender: SubmitSender) {
        self.submission.set_sender(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ------------------------------------------------------------------
    // Render boundary
    // ------------------------------------------------------------------

    pub fn scene(&self) -> Scene {
        self.scene.scene
    }

    pub fn scene_mode(&self) -> SceneMode {
        self.scene.mode
    }

    pub fn form(&self) -> &RsvpForm {
        &self.form
    }

    pub fn toast(&self) -> Toast {
        self.toast.toast()
    }

    pub fn overlays(&self) -> OverlayFlags {
        self.effects.overlays()
    }

    pub fn effects(&self) -> &SelectionEffects {
        &self.effects
    }

    pub fn confetti(&self) -> &ConfettiField {
        &self.confetti
    }

    pub fn in_flight(&self) -> bool {
        self.submission.in_flight()
    }

    pub fn submitted(&self) -> bool {
        self.submission.submitted()
    }

    pub fn themes(&self) -> &'static [ThemeProfile] {
        themes::catalog()
    }

    pub fn selected_theme(&self) -> Option<ThemeId> {
        self.scene.theme
    }

    pub fn theme_cursor(&self) -> usize {
        self.theme_cursor
    }

    /// Profile of the selected theme, or of the highlighted picker row.
    pub fn profile(&self) -> &'static ThemeProfile {
        let id = self
            .scene
            .theme
            .unwrap_or(ThemeId::ALL[self.theme_cursor % ThemeId::ALL.len()]);
        themes::profile(id)
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    // ------------------------------------------------------------------
    // Scene
    // ------------------------------------------------------------------

    /// Open the door on the landing scene.
    pub fn open_door(&mut self) {
        self.dispatch_scene(SceneIntent::Tap);
    }

    pub fn move_theme_cursor(&mut self, direction: i32) {
        let len = ThemeId::ALL.len();
        self.theme_cursor = if direction.is_negative() {
            (self.theme_cursor + len - 1) % len
        } else {
            (self.theme_cursor + 1) % len
        };
    }

    pub fn choose_theme(&mut self, id: ThemeId) {
        if let Some(idx) = ThemeId::ALL.iter().position(|t| *t == id) {
            self.theme_cursor = idx;
        }
        self.dispatch_scene(SceneIntent::ThemeChosen(id));
    }

    pub fn choose_highlighted_theme(&mut self) {
        let id = ThemeId::ALL[self.theme_cursor % ThemeId::ALL.len()];
        self.choose_theme(id);
    }

    /// Return to the theme picker, dropping the form and any attempt still on
    /// the wire. Overlays run out on their own timers.
    pub fn back(&mut self) {
        let before = self.scene.scene;
        self.dispatch_scene(SceneIntent::Back);
        if before != self.scene.scene {
            self.dispatch_form(FormIntent::Reset);
            self.submission.reset();
            self.dispatch_toast(ToastIntent::Dismiss);
            self.focus = FormField::Name;
        }
    }

    // ------------------------------------------------------------------
    // Form
    // ------------------------------------------------------------------

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.dispatch_form(FormIntent::SetName(name.into()));
    }

    pub fn type_char(&mut self, ch: char) {
        self.dispatch_form(FormIntent::InsertChar(ch));
    }

    pub fn backspace(&mut self) {
        self.dispatch_form(FormIntent::Backspace);
    }

    pub fn increment_guests(&mut self) {
        self.dispatch_form(FormIntent::IncrementGuests);
    }

    pub fn decrement_guests(&mut self) {
        self.dispatch_form(FormIntent::DecrementGuests);
    }

    /// Select an RSVP card and fire its effects, even when it was already
    /// selected.
    pub fn select(&mut self, choice: RsvpChoice, now: Instant) {
        if !self.scene.is(Scene::InvitationForm) {
            return;
        }
        self.dispatch_form(FormIntent::SelectStatus(choice));
        self.focus = FormField::Option(choice);
        let profile = self.profile();
        if let Some(notice) = self
            .effects
            .on_select(choice, profile, now, &mut self.confetti)
        {
            self.show_toast(notice.message, notice.kind, notice.ttl, now);
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = FIELD_ORDER[(self.focus_index() + 1) % FIELD_ORDER.len()];
    }

    pub fn focus_prev(&mut self) {
        let len = FIELD_ORDER.len();
        self.focus = FIELD_ORDER[(self.focus_index() + len - 1) % len];
    }

    /// Enter on the focused control.
    pub fn activate(&mut self, now: Instant) {
        match self.focus {
            FormField::Name => self.focus_next(),
            FormField::Guests => self.increment_guests(),
            FormField::Option(choice) => self.select(choice, now),
            FormField::Submit => self.submit(now),
        }
    }

    fn focus_index(&self) -> usize {
        FIELD_ORDER
            .iter()
            .position(|field| *field == self.focus)
            .unwrap_or(0)
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    pub fn submit(&mut self, now: Instant) {
        if !self.scene.is(Scene::InvitationForm) {
            return;
        }
        let theme = match self.scene.mode {
            SceneMode::Picker => self.scene.theme,
            SceneMode::Door => None,
        };
        match self.submission.submit(&self.form, theme) {
            Ok(Dispatch::Sent(_)) | Ok(Dispatch::Busy) => {}
            Err(err) => {
                let ttl = match err {
                    SubmitError::Validation(_) => self.timings.validation_toast(),
                    SubmitError::Transport(_) => self.timings.error_toast(),
                };
                tracing::info!(target: "submission", "submit rejected: {err}");
                self.show_toast(err.user_message(), ToastKind::Error, ttl, now);
            }
        }
    }

    pub fn on_submission_report(&mut self, report: SubmissionReport, now: Instant) {
        match self.submission.finish(report) {
            None => {}
            Some(Ok(())) => {
                self.dispatch_scene(SceneIntent::SubmissionSucceeded);
                if self.form.status == RsvpStatus::Yes {
                    let profile = self.profile();
                    self.effects.celebrate(profile, now, &mut self.confetti);
                }
            }
            Some(Err(err)) => {
                let ttl = self.timings.error_toast();
                self.show_toast(err.user_message(), ToastKind::Error, ttl, now);
            }
        }
    }

    // ------------------------------------------------------------------
    // Timers and terminal
    // ------------------------------------------------------------------

    pub fn on_tick(&mut self, now: Instant) {
        self.dispatch_toast(ToastIntent::Tick { now });
        self.effects.tick(now, &mut self.confetti);
        self.confetti.prune(now);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Whether something on screen is animating and wants frequent ticks.
    pub fn is_animating(&self) -> bool {
        let overlays = self.overlays();
        overlays.celebration
            || overlays.redirect
            || self.confetti.is_active()
            || self.effects.pending_bursts() > 0
            || self.in_flight()
    }

    fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind, ttl: Duration, now: Instant) {
        self.dispatch_toast(ToastIntent::Show {
            message: message.into(),
            kind,
            ttl,
            now,
        });
    }

    fn dispatch_scene(&mut self, intent: SceneIntent) {
        let before = self.scene.scene;
        dispatch_mvi!(self, scene, SceneReducer, intent);
        if before != self.scene.scene {
            tracing::info!(
                target: "scene",
                from = ?before,
                to = ?self.scene.scene,
                theme = ?self.scene.theme,
                "scene changed"
            );
        }
    }

    fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    fn dispatch_toast(&mut self, intent: ToastIntent) {
        dispatch_mvi!(self, toast, ToastReducer, intent);
    }
}
