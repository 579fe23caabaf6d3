//! Rotating-hue rainbow animation.

use embassy_time::Duration;
use libm::{floorf, fmodf};

use super::{Animation, count_down, dt_secs};
use crate::color::{Rgb, rgb_from_hsv};
use crate::frame::Frame;

/// Rainbow animation: a hue gradient laid across the strip, rotating
/// through the full color wheel once per cycle period.
///
/// `arc` controls how much of the wheel is spread across the strip: 1.0
/// shows one full rainbow, 0.5 half of it, 2.0 two back to back. `step`
/// groups adjacent LEDs into blocks that share a hue instead of giving
/// every LED its own phase.
#[derive(Debug, Clone)]
pub struct Rainbow<const MAX_LEDS: usize> {
    runtime: Duration,
    remaining: Duration,
    frame: Frame<MAX_LEDS>,

    hue: f32,
    saturation: f32,
    value: f32,
    hue_rate: f32,
    arc: f32,
    step: usize,
}

impl<const MAX_LEDS: usize> Rainbow<MAX_LEDS> {
    /// Create a rainbow animation.
    ///
    /// * `runtime` - total time before the animation is exhausted.
    /// * `cycle_period` - time for the hue to rotate a full 360 degrees.
    /// * `brightness` - the frame's global brightness, `[0, 1]`.
    /// * `led_count` - strip length, capped at `MAX_LEDS`.
    /// * `saturation`, `value` - HSV components shared by every LED.
    /// * `arc` - fraction of the color wheel spread across the strip.
    /// * `step` - block size of LEDs sharing a hue; 0 is treated as 1.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        runtime: Duration,
        cycle_period: Duration,
        brightness: f32,
        led_count: usize,
        saturation: f32,
        value: f32,
        arc: f32,
        step: usize,
    ) -> Self {
        Self {
            runtime,
            remaining: runtime,
            frame: Frame::new(brightness, led_count),
            hue: 0.0,
            saturation,
            value,
            hue_rate: 360.0 / dt_secs(cycle_period),
            arc,
            step: step.max(1),
        }
    }

    /// The global hue in degrees, `[0, 360)`.
    pub fn hue(&self) -> f32 {
        self.hue
    }
}

impl<const MAX_LEDS: usize> Animation<MAX_LEDS> for Rainbow<MAX_LEDS> {
    #[allow(clippy::cast_precision_loss)]
    fn update(&mut self, dt: Duration) {
        self.remaining = count_down(self.remaining, dt);

        self.hue = fmodf(self.hue + self.hue_rate * dt_secs(dt), 360.0);

        let len = self.frame.len() as f32;
        let step = self.step as f32;
        let (hue, saturation, value, arc) = (self.hue, self.saturation, self.value, self.arc);
        for (index, led) in self.frame.leds_mut().iter_mut().enumerate() {
            // LEDs in the same block of `step` share a hue.
            let block = floorf(index as f32 / step) * step;
            let phase = block / len * 360.0 * arc;
            *led = rgb_from_hsv(hue + phase, saturation, value);
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
        self.hue = 0.0;
        for led in self.frame.leds_mut() {
            *led = Rgb::default();
        }
    }
}
