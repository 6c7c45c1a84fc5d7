//! Theme catalog.
//!
//! Every visual/copy variant of the invitation is a [`ThemeProfile`] looked up
//! by [`ThemeId`]. The scene, form and submission logic never branch on the
//! id itself; they only ask the catalog for the active profile.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::ui::form::RsvpChoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    Perk,
    Garden,
    Midnight,
}

impl ThemeId {
    pub const ALL: [ThemeId; 3] = [ThemeId::Perk, ThemeId::Garden, ThemeId::Midnight];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Perk => "perk",
            ThemeId::Garden => "garden",
            ThemeId::Midnight => "midnight",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Theme '{}' not found", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for ThemeId {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Label pair shown on an RSVP card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionLabel {
    pub text: &'static str,
    pub subtext: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Door and header background.
    pub primary: Color,
    /// Door frame, separators, confetti.
    pub accent: Color,
    pub light: Color,
    pub yes: Color,
    pub maybe: Color,
    pub no: Color,
}

impl Palette {
    pub fn choice(&self, choice: RsvpChoice) -> Color {
        match choice {
            RsvpChoice::Yes => self.yes,
            RsvpChoice::Maybe => self.maybe,
            RsvpChoice::No => self.no,
        }
    }

    /// Colors handed to the confetti trigger.
    pub fn confetti(&self) -> Vec<Color> {
        vec![self.primary, self.accent, self.light]
    }
}

/// Copy and palette for one invitation variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeProfile {
    pub id: ThemeId,
    pub display_name: &'static str,
    pub door_label: &'static str,
    pub door_prompt: &'static str,
    pub title: &'static str,
    pub details: &'static str,
    pub venue: &'static str,
    pub name_placeholder: &'static str,
    pub question: &'static str,
    pub yes: OptionLabel,
    pub maybe: OptionLabel,
    pub no: OptionLabel,
    pub maybe_note: &'static str,
    pub success_title: &'static str,
    pub success_body: &'static str,
    pub palette: Palette,
}

impl ThemeProfile {
    pub fn option(&self, choice: RsvpChoice) -> OptionLabel {
        match choice {
            RsvpChoice::Yes => self.yes,
            RsvpChoice::Maybe => self.maybe,
            RsvpChoice::No => self.no,
        }
    }
}

const PERK: ThemeProfile = ThemeProfile {
    id: ThemeId::Perk,
    display_name: "Purple Door",
    door_label: "KNOCK KNOCK",
    door_prompt: "Press Enter to open the door",
    title: "The One With The Engagement",
    details: "Dec 10 • 5:30 PM • Our Central Perk",
    venue: "(Accord Chrome, Chrompet)",
    name_placeholder: "Chandler Bing",
    question: "Are you coming?",
    yes: OptionLabel {
        text: "I'll be there for you!",
        subtext: "Accept",
    },
    maybe: OptionLabel {
        text: "We were on a break...",
        subtext: "Maybe",
    },
    no: OptionLabel {
        text: "I'm in Yemen",
        subtext: "Will be cheering for you guys from afar",
    },
    maybe_note: "I'll reach out to you again on Dec 8th",
    success_title: "You're our Lobster!",
    success_body: "Thanks for letting us know. We can't wait to celebrate with you.",
    palette: Palette {
        primary: Color::Rgb(0x92, 0x6f, 0x98),
        accent: Color::Rgb(0xf4, 0xc4, 0x30),
        light: Color::Rgb(0xff, 0xff, 0xff),
        yes: Color::Rgb(0x22, 0xc5, 0x5e),
        maybe: Color::Rgb(0xf5, 0x9e, 0x0b),
        no: Color::Rgb(0xef, 0x44, 0x44),
    },
};

const GARDEN: ThemeProfile = ThemeProfile {
    id: ThemeId::Garden,
    display_name: "Garden Gate",
    door_label: "RING THE BELL",
    door_prompt: "Press Enter to open the gate",
    title: "Tea Under The Willow",
    details: "Dec 10 • 4:00 PM • The Back Garden",
    venue: "(Bring a hat)",
    name_placeholder: "Your full name",
    question: "Will you join us?",
    yes: OptionLabel {
        text: "Save me a cup!",
        subtext: "Accept",
    },
    maybe: OptionLabel {
        text: "Still checking the weather...",
        subtext: "Maybe",
    },
    no: OptionLabel {
        text: "Can't make it this time",
        subtext: "Sending flowers instead",
    },
    maybe_note: "We'll check in with you again a few days before",
    success_title: "See you in the garden!",
    success_body: "Thanks for replying. The kettle will be on.",
    palette: Palette {
        primary: Color::Rgb(0x3f, 0x6b, 0x4a),
        accent: Color::Rgb(0xe8, 0xb4, 0xbc),
        light: Color::Rgb(0xfa, 0xf7, 0xf0),
        yes: Color::Rgb(0x4a, 0xde, 0x80),
        maybe: Color::Rgb(0xfa, 0xcc, 0x15),
        no: Color::Rgb(0xf8, 0x71, 0x71),
    },
};

const MIDNIGHT: ThemeProfile = ThemeProfile {
    id: ThemeId::Midnight,
    display_name: "Midnight Hall",
    door_label: "KNOCK TWICE",
    door_prompt: "Press Enter to step inside",
    title: "A Night Under The Stars",
    details: "Dec 10 • 8:00 PM • The Rooftop",
    venue: "(Dress code: sparkle)",
    name_placeholder: "Your full name",
    question: "Can we count on you?",
    yes: OptionLabel {
        text: "Wouldn't miss it",
        subtext: "Accept",
    },
    maybe: OptionLabel {
        text: "Let me check the stars",
        subtext: "Maybe",
    },
    no: OptionLabel {
        text: "I'll be on another planet",
        subtext: "Raising a glass from afar",
    },
    maybe_note: "We'll ask again closer to the night",
    success_title: "You're on the list!",
    success_body: "Thanks for letting us know. Dust off your dancing shoes.",
    palette: Palette {
        primary: Color::Rgb(0x1e, 0x1b, 0x4b),
        accent: Color::Rgb(0xc0, 0xc0, 0xd8),
        light: Color::Rgb(0xfd, 0xe6, 0x8a),
        yes: Color::Rgb(0x34, 0xd3, 0x99),
        maybe: Color::Rgb(0xfb, 0xbf, 0x24),
        no: Color::Rgb(0xfb, 0x71, 0x85),
    },
};

static CATALOG: [ThemeProfile; 3] = [PERK, GARDEN, MIDNIGHT];

/// All built-in profiles, in picker order.
pub fn catalog() -> &'static [ThemeProfile] {
    &CATALOG
}

pub fn profile(id: ThemeId) -> &'static ThemeProfile {
    match id {
        ThemeId::Perk => &CATALOG[0],
        ThemeId::Garden => &CATALOG[1],
        ThemeId::Midnight => &CATALOG[2],
    }
}
