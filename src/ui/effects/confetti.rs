use std::time::{Duration, Instant};

use ratatui::style::Color;

/// Parameters handed to the particle engine for one burst.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiBurst {
    pub particle_count: u32,
    /// Cone width in degrees.
    pub spread: f32,
    /// Normalized burst origin, `(0, 0)` is the top-left corner.
    pub origin: (f32, f32),
    pub colors: Vec<Color>,
}

/// The particle engine seen from the scheduler: fire-and-forget.
pub trait ConfettiTrigger {
    fn burst(&mut self, burst: ConfettiBurst, now: Instant);
}

/// A single particle position, normalized to the drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spark {
    pub x: f32,
    pub y: f32,
    pub glyph: char,
    pub color: Color,
}

const SPARK_LIFETIME: Duration = Duration::from_millis(1600);
const GLYPHS: [char; 4] = ['*', '+', '•', '✦'];
/// One glyph per this many requested particles; a terminal cell is large.
const PARTICLES_PER_GLYPH: u32 = 6;

/// Terminal particle engine. Keeps recent bursts and computes spark positions
/// from elapsed time, so it needs no per-tick simulation state.
#[derive(Debug, Default)]
pub struct ConfettiField {
    live: Vec<(ConfettiBurst, Instant)>,
    fired: usize,
}

impl ConfettiTrigger for ConfettiField {
    fn burst(&mut self, burst: ConfettiBurst, now: Instant) {
        self.fired += 1;
        self.live.push((burst, now));
    }
}

impl ConfettiField {
    /// Total bursts received this session.
    pub fn fired(&self) -> usize {
        self.fired
    }

    pub fn is_active(&self) -> bool {
        !self.live.is_empty()
    }

    pub fn prune(&mut self, now: Instant) {
        self.live
            .retain(|(_, started)| now.saturating_duration_since(*started) < SPARK_LIFETIME);
    }

    pub fn sparks(&self, now: Instant) -> Vec<Spark> {
        let mut sparks = Vec::new();
        for (burst, started) in &self.live {
            let elapsed = now.saturating_duration_since(*started);
            if elapsed >= SPARK_LIFETIME {
                continue;
            }
            let t = elapsed.as_secs_f32() / SPARK_LIFETIME.as_secs_f32();
            let count = (burst.particle_count / PARTICLES_PER_GLYPH).max(1);
            for i in 0..count {
                let spark = spark_at(burst, i, count, t);
                if (0.0..1.0).contains(&spark.x) && (0.0..1.0).contains(&spark.y) {
                    sparks.push(spark);
                }
            }
        }
        sparks
    }
}

fn spark_at(burst: &ConfettiBurst, i: u32, count: u32, t: f32) -> Spark {
    let lane = if count > 1 {
        i as f32 / (count - 1) as f32 - 0.5
    } else {
        0.0
    };
    let jitter = ((i.wrapping_mul(37) % 11) as f32 / 11.0 - 0.5) * 12.0;
    let angle = (-90.0 + burst.spread * lane + jitter).to_radians();
    let speed = 0.45 + (i.wrapping_mul(7919) % 13) as f32 / 13.0 * 0.35;
    let (origin_x, origin_y) = burst.origin;
    let x = origin_x + angle.cos() * speed * t * 0.6;
    let y = origin_y + angle.sin() * speed * t + 0.9 * t * t;
    let color = if burst.colors.is_empty() {
        Color::White
    } else {
        burst.colors[i as usize % burst.colors.len()]
    };
    Spark {
        x,
        y,
        glyph: GLYPHS[i as usize % GLYPHS.len()],
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burst() -> ConfettiBurst {
        ConfettiBurst {
            particle_count: 60,
            spread: 70.0,
            origin: (0.5, 0.7),
            colors: vec![Color::Magenta, Color::Yellow],
        }
    }

    #[test]
    fn sparks_start_near_origin() {
        let mut field = ConfettiField::default();
        let now = Instant::now();
        field.burst(burst(), now);
        let sparks = field.sparks(now);
        assert_eq!(sparks.len(), 10);
        assert!(sparks.iter().all(|s| (s.x - 0.5).abs() < 1e-3 && (s.y - 0.7).abs() < 1e-3));
    }

    #[test]
    fn prune_drops_expired_bursts() {
        let mut field = ConfettiField::default();
        let now = Instant::now();
        field.burst(burst(), now);
        field.prune(now + SPARK_LIFETIME);
        assert!(!field.is_active());
        assert_eq!(field.fired(), 1);
    }
}
