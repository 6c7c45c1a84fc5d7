//! Timed decorative effects triggered by RSVP selections.

mod confetti;
mod scheduler;

pub use confetti::{ConfettiBurst, ConfettiField, ConfettiTrigger, Spark};
pub use scheduler::{EffectTimings, Notice, Overlay, OverlayFlags, SelectionEffects};
