//! Approval celebration, modelled as a schedule of bursts.
//!
//! The plan is data: front-ends decide how to draw a burst.

use rand::Rng;
use std::time::Duration;

/// Palette shared by every burst.
pub const CONFETTI_COLORS: [&str; 5] = ["#d4af37", "#e6c75a", "#f5e1a4", "#0a1628", "#ffffff"];

const DEFAULT_DURATION: Duration = Duration::from_millis(3000);
const DEFAULT_TICK: Duration = Duration::from_millis(250);
const MAX_PARTICLES: f64 = 50.0;

/// Launch parameters common to every burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstDefaults {
    pub start_velocity: u32,
    pub spread: u32,
    pub ticks: u32,
    pub z_index: u32,
}

impl Default for BurstDefaults {
    fn default() -> Self {
        Self {
            start_velocity: 30,
            spread: 360,
            ticks: 60,
            z_index: 10000,
        }
    }
}

/// One emission from a point on screen. Coordinates are viewport fractions.
#[derive(Debug, Clone, PartialEq)]
pub struct Burst {
    /// Offset from the start of the animation.
    pub at: Duration,
    pub particle_count: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

/// Timed schedule: a left and a right burst every tick, thinning out until the duration ends.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPlan {
    pub duration: Duration,
    pub tick: Duration,
    pub defaults: BurstDefaults,
    pub bursts: Vec<Burst>,
}

impl ConfettiPlan {
    /// Standard 3 s celebration with 250 ms ticks.
    pub fn celebrate(rng: &mut impl Rng) -> Self {
        Self::build(DEFAULT_DURATION, DEFAULT_TICK, rng)
    }

    pub fn build(duration: Duration, tick: Duration, rng: &mut impl Rng) -> Self {
        let mut bursts = Vec::new();
        if tick.is_zero() {
            return Self {
                duration,
                tick,
                defaults: BurstDefaults::default(),
                bursts,
            };
        }

        let total = duration.as_secs_f64();
        let mut at = tick;
        while at < duration {
            let time_left = (duration - at).as_secs_f64();
            let particle_count = MAX_PARTICLES * (time_left / total);

            bursts.push(Burst {
                at,
                particle_count,
                origin_x: rng.random_range(0.1..0.3),
                origin_y: rng.random::<f64>() - 0.2,
            });
            bursts.push(Burst {
                at,
                particle_count,
                origin_x: rng.random_range(0.7..0.9),
                origin_y: rng.random::<f64>() - 0.2,
            });

            at += tick;
        }

        Self {
            duration,
            tick,
            defaults: BurstDefaults::default(),
            bursts,
        }
    }

    /// Bursts grouped by tick, in firing order.
    pub fn frames(&self) -> impl Iterator<Item = &[Burst]> {
        self.bursts.chunk_by(|a, b| a.at == b.at)
    }
}
