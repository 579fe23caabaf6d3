//! Duty-cycle strobe animation.

use embassy_time::Duration;
use libm::fmodf;

use super::{Animation, count_down, dt_secs};
use crate::color::Rgb;
use crate::frame::Frame;

/// Strobe animation: the whole strip flashes one color with PWM-like
/// control over the flash timing.
///
/// `duty` is the fraction of each period the strip is lit, in `[0, 1)`;
/// the rest of the period it is black.
#[derive(Debug, Clone)]
pub struct Strobe<const MAX_LEDS: usize> {
    runtime: Duration,
    remaining: Duration,
    frame: Frame<MAX_LEDS>,

    color: Rgb,
    period: f32,
    duty: f32,
    phase: f32,
}

impl<const MAX_LEDS: usize> Strobe<MAX_LEDS> {
    /// Create a strobe animation.
    ///
    /// * `runtime` - total time before the animation is exhausted.
    /// * `brightness` - the frame's global brightness, `[0, 1]`.
    /// * `led_count` - strip length, capped at `MAX_LEDS`.
    /// * `color` - the flash color.
    /// * `period` - time of one on/off cycle.
    /// * `duty` - lit fraction of each period, `[0, 1)`.
    pub fn new(
        runtime: Duration,
        brightness: f32,
        led_count: usize,
        color: Rgb,
        period: Duration,
        duty: f32,
    ) -> Self {
        Self {
            runtime,
            remaining: runtime,
            frame: Frame::new(brightness, led_count),
            color,
            period: dt_secs(period),
            duty,
            phase: 0.0,
        }
    }
}

impl<const MAX_LEDS: usize> Animation<MAX_LEDS> for Strobe<MAX_LEDS> {
    fn update(&mut self, dt: Duration) {
        self.remaining = count_down(self.remaining, dt);

        self.phase = fmodf(self.phase + dt_secs(dt), self.period);

        let lit = self.phase / self.period < self.duty;
        let color = if lit { self.color } else { Rgb::default() };
        for led in self.frame.leds_mut() {
            *led = color;
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
        self.phase = 0.0;
        for led in self.frame.leds_mut() {
            *led = Rgb::default();
        }
    }
}
