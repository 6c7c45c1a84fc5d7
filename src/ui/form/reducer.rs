use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{RsvpForm, RsvpStatus};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = RsvpForm;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::SetName(name) => RsvpForm { name, ..state },
            FormIntent::InsertChar(ch) => {
                let mut name = state.name;
                name.push(ch);
                RsvpForm { name, ..state }
            }
            FormIntent::Backspace => {
                let mut name = state.name;
                name.pop();
                RsvpForm { name, ..state }
            }
            FormIntent::IncrementGuests => RsvpForm {
                guests: state.guests.saturating_add(1),
                ..state
            },
            FormIntent::DecrementGuests => RsvpForm {
                guests: state.guests.saturating_sub(1).max(1),
                ..state
            },
            FormIntent::SelectStatus(choice) => RsvpForm {
                status: RsvpStatus::from(choice),
                ..state
            },
            FormIntent::Reset => RsvpForm::default(),
        }
    }
}
