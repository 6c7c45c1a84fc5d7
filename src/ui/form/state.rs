use std::fmt;

use serde::Serialize;

use crate::ui::mvi::UiState;

/// One of the three RSVP cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RsvpChoice {
    Yes,
    Maybe,
    No,
}

impl RsvpChoice {
    pub const ALL: [RsvpChoice; 3] = [RsvpChoice::Yes, RsvpChoice::Maybe, RsvpChoice::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpChoice::Yes => "Yes",
            RsvpChoice::Maybe => "Maybe",
            RsvpChoice::No => "No",
        }
    }
}

impl fmt::Display for RsvpChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RsvpStatus {
    #[default]
    Unset,
    Yes,
    Maybe,
    No,
}

impl RsvpStatus {
    pub fn choice(&self) -> Option<RsvpChoice> {
        match self {
            RsvpStatus::Unset => None,
            RsvpStatus::Yes => Some(RsvpChoice::Yes),
            RsvpStatus::Maybe => Some(RsvpChoice::Maybe),
            RsvpStatus::No => Some(RsvpChoice::No),
        }
    }

    pub fn is_selected(&self, choice: RsvpChoice) -> bool {
        self.choice() == Some(choice)
    }
}

impl From<RsvpChoice> for RsvpStatus {
    fn from(choice: RsvpChoice) -> Self {
        match choice {
            RsvpChoice::Yes => RsvpStatus::Yes,
            RsvpChoice::Maybe => RsvpStatus::Maybe,
            RsvpChoice::No => RsvpStatus::No,
        }
    }
}

/// The invitation form. `guests` never drops below one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpForm {
    pub name: String,
    pub guests: u32,
    pub status: RsvpStatus,
}

impl Default for RsvpForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            guests: 1,
            status: RsvpStatus::Unset,
        }
    }
}

impl UiState for RsvpForm {}

impl RsvpForm {
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Both presence checks pass.
    pub fn is_complete(&self) -> bool {
        self.has_name() && self.status != RsvpStatus::Unset
    }
}
