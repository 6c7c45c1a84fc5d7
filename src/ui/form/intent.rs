use crate::ui::form::state::RsvpChoice;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    /// Replace the whole name. Any string is accepted, including empty.
    SetName(String),
    InsertChar(char),
    Backspace,
    IncrementGuests,
    /// Clamped at one guest.
    DecrementGuests,
    SelectStatus(RsvpChoice),
    /// Back to a blank form (leaving the invitation in multi-theme mode).
    Reset,
}

impl Intent for FormIntent {}
