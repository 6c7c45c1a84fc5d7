use std::time::{Duration, Instant};

use crate::ui::mvi::Intent;
use crate::ui::toast::state::ToastKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastIntent {
    /// Show a toast, replacing whatever is visible and restarting the timer.
    Show {
        message: String,
        kind: ToastKind,
        ttl: Duration,
        now: Instant,
    },
    Dismiss,
    Tick { now: Instant },
}

impl Intent for ToastIntent {}
