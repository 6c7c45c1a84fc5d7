use crate::ui::mvi::Reducer;
use crate::ui::toast::intent::ToastIntent;
use crate::ui::toast::state::ToastState;

pub struct ToastReducer;

impl Reducer for ToastReducer {
    type State = ToastState;
    type Intent = ToastIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ToastIntent::Show {
                message,
                kind,
                ttl,
                now,
            } => ToastState::Visible {
                message,
                kind,
                expires_at: now + ttl,
            },
            ToastIntent::Dismiss => ToastState::Hidden,
            ToastIntent::Tick { now } => match state {
                ToastState::Visible { expires_at, .. } if now >= expires_at => ToastState::Hidden,
                other => other,
            },
        }
    }
}
