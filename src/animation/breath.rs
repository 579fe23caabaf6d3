//! Whole-strip breathing animation.

use embassy_time::Duration;
use heapless::Vec;
use rand::SeedableRng;
use rand_xoshiro::Xoroshiro128StarStar;

use super::{Animation, count_down, dt_secs};
use crate::color::{Rgb, random_rgb, scale_rgb};
use crate::frame::Frame;

/// Capacity of an explicit breath color cycle.
pub const MAX_CYCLE_COLORS: usize = 16;

/// How a [`Breath`] picks the color of each breath.
#[derive(Debug, Clone)]
pub enum BreathMode {
    /// Step through an explicit color cycle, one color per breath,
    /// wrapping at the end. An empty cycle behaves like `Random`.
    Cycle(Vec<Rgb, MAX_CYCLE_COLORS>),
    /// Draw a fresh uniformly random color for every breath.
    Random { seed: u64 },
}

/// Breathing animation: the whole strip rises from black to one color
/// and back, once per breath period.
///
/// The envelope is ballistic. With acceleration `a = -8 / period²` and
/// launch velocity `v0 = 4 / period`, the level follows
/// `v0·t + a·t²/2`, which rises from 0 to 1 and returns to 0 in exactly
/// `period` seconds. When the level lands (non-positive with downward
/// velocity) the breath is complete: the level clamps to 0, the velocity
/// resets to `v0` and the next color is chosen.
#[derive(Debug, Clone)]
pub struct Breath<const MAX_LEDS: usize> {
    runtime: Duration,
    remaining: Duration,
    frame: Frame<MAX_LEDS>,

    cycle: Option<Vec<Rgb, MAX_CYCLE_COLORS>>,
    index: usize,
    seed: u64,
    rng: Xoroshiro128StarStar,
    current: Rgb,

    level: f32,
    acc: f32,
    vel: f32,
    vel0: f32,
}

impl<const MAX_LEDS: usize> Breath<MAX_LEDS> {
    /// Create a breathing animation.
    ///
    /// * `runtime` - total time before the animation is exhausted.
    /// * `breath_period` - time of one full rise-and-fall.
    /// * `brightness` - the frame's global brightness ceiling, `[0, 1]`.
    /// * `led_count` - strip length, capped at `MAX_LEDS`.
    /// * `mode` - explicit color cycle or seeded random colors.
    pub fn new(
        runtime: Duration,
        breath_period: Duration,
        brightness: f32,
        led_count: usize,
        mode: BreathMode,
    ) -> Self {
        let (cycle, seed) = match mode {
            BreathMode::Cycle(colors) if !colors.is_empty() => (Some(colors), 0),
            BreathMode::Cycle(_) => (None, 0),
            BreathMode::Random { seed } => (None, seed),
        };

        let mut rng = Xoroshiro128StarStar::seed_from_u64(seed);
        let current = match &cycle {
            Some(colors) => colors[0],
            None => random_rgb(&mut rng),
        };

        let period = dt_secs(breath_period);

        Self {
            runtime,
            remaining: runtime,
            frame: Frame::new(brightness, led_count),
            cycle,
            index: 0,
            seed,
            rng,
            current,
            level: 0.0,
            acc: -8.0 / (period * period),
            vel: 4.0 / period,
            vel0: 4.0 / period,
        }
    }

    /// The color of the breath currently in flight.
    pub fn current_color(&self) -> Rgb {
        self.current
    }

    fn next_color(&mut self) {
        match &self.cycle {
            Some(colors) => {
                self.index = (self.index + 1) % colors.len();
                self.current = colors[self.index];
            }
            None => self.current = random_rgb(&mut self.rng),
        }
    }
}

impl<const MAX_LEDS: usize> Animation<MAX_LEDS> for Breath<MAX_LEDS> {
    fn update(&mut self, dt: Duration) {
        self.remaining = count_down(self.remaining, dt);

        let dt = dt_secs(dt);
        self.vel += self.acc * dt;
        self.level += self.vel * dt;

        if self.level <= 0.0 && self.vel < 0.0 {
            // Touchdown: one breath completed.
            self.level = 0.0;
            self.vel = self.vel0;
            self.next_color();
        }

        let lit = scale_rgb(self.current, self.level);
        for led in self.frame.leds_mut() {
            *led = lit;
        }
    }

    fn frame(&self) -> &Frame<MAX_LEDS> {
        &self.frame
    }

    fn time_remaining(&self) -> Duration {
        self.remaining
    }

    fn reset(&mut self) {
        self.remaining = self.runtime;
        self.level = 0.0;
        self.vel = self.vel0;
        self.index = 0;
        self.rng = Xoroshiro128StarStar::seed_from_u64(self.seed);
        self.current = match &self.cycle {
            Some(colors) => colors[0],
            None => random_rgb(&mut self.rng),
        };
        for led in self.frame.leds_mut() {
            *led = Rgb::default();
        }
    }
}
