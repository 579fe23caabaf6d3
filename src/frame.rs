//! Frame buffer owned by an animation.

use heapless::Vec;

use crate::color::Rgb;

/// Number of brightness steps in the 5-bit APA102 global field.
const BRIGHTNESS_STEPS: f32 = 31.0;

/// A fixed-length run of LED colors plus a global brightness scalar.
///
/// The length is chosen at construction, capped at `MAX_LEDS`, and never
/// changes afterwards; every animation owns exactly one frame and
/// rewrites its colors in place on each update. The draw engine only
/// borrows the frame for the duration of a single wire write.
#[derive(Debug, Clone)]
pub struct Frame<const MAX_LEDS: usize> {
    brightness: f32,
    leds: Vec<Rgb, MAX_LEDS>,
}

impl<const MAX_LEDS: usize> Frame<MAX_LEDS> {
    /// Create a frame of `led_count` black LEDs.
    ///
    /// `led_count` is capped at `MAX_LEDS`; `brightness` is interpreted
    /// on the `[0, 1]` scale and clamped when encoded.
    pub fn new(brightness: f32, led_count: usize) -> Self {
        let mut leds = Vec::new();
        for _ in 0..led_count.min(MAX_LEDS) {
            // Capacity checked by the loop bound.
            let _ = leds.push(Rgb::default());
        }

        Self { brightness, leds }
    }

    /// Global brightness scalar.
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Replace the global brightness scalar.
    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness;
    }

    /// The 5-bit global brightness field of the APA102 LED frame.
    ///
    /// Maps `[0, 1]` onto `0..=31`, flooring; out-of-range scalars are
    /// clamped so the code never exceeds five bits.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn brightness_code(&self) -> u8 {
        (self.brightness.clamp(0.0, 1.0) * BRIGHTNESS_STEPS) as u8
    }

    /// Read-only view of the LED colors.
    pub fn leds(&self) -> &[Rgb] {
        &self.leds
    }

    /// Mutable view of the LED colors. The length cannot be changed
    /// through this view.
    pub fn leds_mut(&mut self) -> &mut [Rgb] {
        &mut self.leds
    }

    /// Number of LEDs in the frame.
    pub fn len(&self) -> usize {
        self.leds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }
}
