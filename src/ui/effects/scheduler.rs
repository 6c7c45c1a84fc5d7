use std::time::{Duration, Instant};

use crate::themes::ThemeProfile;
use crate::ui::effects::confetti::{ConfettiBurst, ConfettiTrigger};
use crate::ui::form::RsvpChoice;
use crate::ui::toast::ToastKind;

const BURST_PARTICLES: u32 = 150;
const BURST_SPREAD: f32 = 70.0;
const BURST_ORIGINS: [(f32, f32); 3] = [(0.5, 0.7), (0.25, 0.75), (0.75, 0.75)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectTimings {
    pub celebration: Duration,
    pub redirect: Duration,
    pub maybe_notice: Duration,
    /// Offsets of the staggered confetti bursts, relative to the selection.
    pub burst_offsets: Vec<Duration>,
}

impl Default for EffectTimings {
    fn default() -> Self {
        Self {
            celebration: Duration::from_millis(2500),
            redirect: Duration::from_millis(2000),
            maybe_notice: Duration::from_millis(4000),
            burst_offsets: vec![
                Duration::ZERO,
                Duration::from_millis(200),
                Duration::from_millis(400),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Clapping hands after a Yes.
    Celebration,
    /// Airplane flying off after a No.
    Redirect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayFlags {
    pub celebration: bool,
    pub redirect: bool,
}

/// Toast request produced by a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: ToastKind,
    pub ttl: Duration,
}

#[derive(Debug, Clone, Copy, Default)]
struct OverlaySlot {
    window: Option<(Instant, Instant)>,
}

impl OverlaySlot {
    /// Arming replaces any pending deadline.
    fn arm(&mut self, now: Instant, duration: Duration) {
        self.window = Some((now, now + duration));
    }

    fn expire(&mut self, now: Instant) {
        if matches!(self.window, Some((_, until)) if now >= until) {
            self.window = None;
        }
    }

    fn progress(&self, now: Instant) -> Option<f32> {
        let (start, until) = self.window?;
        let total = until.saturating_duration_since(start).as_secs_f32();
        if total <= 0.0 {
            return Some(1.0);
        }
        let elapsed = now.saturating_duration_since(start).as_secs_f32();
        Some((elapsed / total).min(1.0))
    }
}

#[derive(Debug, Clone)]
struct ScheduledBurst {
    due: Instant,
    burst: ConfettiBurst,
}

/// Maps RSVP selections to timed effects and expires them.
#[derive(Debug, Clone)]
pub struct SelectionEffects {
    timings: EffectTimings,
    celebration: OverlaySlot,
    redirect: OverlaySlot,
    pending: Vec<ScheduledBurst>,
}

impl SelectionEffects {
    pub fn new(timings: EffectTimings) -> Self {
        Self {
            timings,
            celebration: OverlaySlot::default(),
            redirect: OverlaySlot::default(),
            pending: Vec::new(),
        }
    }

    pub fn timings(&self) -> &EffectTimings {
        &self.timings
    }

    /// Dispatch the effects for a selection. Re-selecting the same choice
    /// fires them again.
    pub fn on_select(
        &mut self,
        choice: RsvpChoice,
        profile: &ThemeProfile,
        now: Instant,
        trigger: &mut dyn ConfettiTrigger,
    ) -> Option<Notice> {
        match choice {
            RsvpChoice::Yes => {
                self.celebrate(profile, now, trigger);
                None
            }
            RsvpChoice::Maybe => Some(Notice {
                message: profile.maybe_note.to_string(),
                kind: ToastKind::Info,
                ttl: self.timings.maybe_notice,
            }),
            RsvpChoice::No => {
                tracing::debug!(target: "effects", "redirect overlay armed");
                self.redirect.arm(now, self.timings.redirect);
                None
            }
        }
    }

    /// Confetti bursts plus the celebration overlay.
    pub fn celebrate(
        &mut self,
        profile: &ThemeProfile,
        now: Instant,
        trigger: &mut dyn ConfettiTrigger,
    ) {
        tracing::debug!(
            target: "effects",
            bursts = self.timings.burst_offsets.len(),
            "celebration armed"
        );
        let colors = profile.palette.confetti();
        for (idx, offset) in self.timings.burst_offsets.iter().enumerate() {
            self.pending.push(ScheduledBurst {
                due: now + *offset,
                burst: ConfettiBurst {
                    particle_count: BURST_PARTICLES,
                    spread: BURST_SPREAD,
                    origin: BURST_ORIGINS[idx % BURST_ORIGINS.len()],
                    colors: colors.clone(),
                },
            });
        }
        self.celebration.arm(now, self.timings.celebration);
        self.fire_due(now, trigger);
    }

    /// Fire due bursts and clear expired overlays.
    pub fn tick(&mut self, now: Instant, trigger: &mut dyn ConfettiTrigger) {
        self.fire_due(now, trigger);
        self.celebration.expire(now);
        self.redirect.expire(now);
    }

    pub fn overlays(&self) -> OverlayFlags {
        OverlayFlags {
            celebration: self.celebration.window.is_some(),
            redirect: self.redirect.window.is_some(),
        }
    }

    pub fn is_active(&self, overlay: Overlay) -> bool {
        let flags = self.overlays();
        match overlay {
            Overlay::Celebration => flags.celebration,
            Overlay::Redirect => flags.redirect,
        }
    }

    /// Fraction of the overlay's window already elapsed, for animation.
    pub fn progress(&self, overlay: Overlay, now: Instant) -> Option<f32> {
        match overlay {
            Overlay::Celebration => self.celebration.progress(now),
            Overlay::Redirect => self.redirect.progress(now),
        }
    }

    pub fn pending_bursts(&self) -> usize {
        self.pending.len()
    }

    fn fire_due(&mut self, now: Instant, trigger: &mut dyn ConfettiTrigger) {
        let (due, later): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending).into_iter().partition(|b| b.due <= now);
        self.pending = later;
        for scheduled in due {
            trigger.burst(scheduled.burst, now);
        }
    }
}
