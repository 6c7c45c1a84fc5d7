mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{RsvpChoice, RsvpForm, RsvpStatus};
