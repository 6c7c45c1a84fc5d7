//! Single-slot toast notification.
//!
//! The deadline lives in the state, so a replacement toast carries its own
//! expiry and an older deadline can never hide it early.

mod intent;
mod reducer;
mod state;

pub use intent::ToastIntent;
pub use reducer::ToastReducer;
pub use state::{Toast, ToastKind, ToastState};
