//! Animations with compile-time known variants.
//!
//! An animation is a finite, time-driven generator of LED frames: each
//! `update` advances its owned [`Frame`] by the elapsed time and burns
//! down a remaining-runtime countdown. All variants live in one enum so
//! a heterogeneous queue needs no heap allocation or open subclassing.

mod breath;
mod rainbow;
mod strobe;

use embassy_time::Duration;

pub use breath::{Breath, BreathMode, MAX_CYCLE_COLORS};
pub use rainbow::Rainbow;
pub use strobe::Strobe;

use crate::frame::Frame;

pub trait Animation<const MAX_LEDS: usize> {
    /// Advance the animation by `dt`, rewriting the owned frame.
    ///
    /// Also decrements the remaining runtime, saturating at zero.
    fn update(&mut self, dt: Duration);

    /// Read-only view of the current frame.
    fn frame(&self) -> &Frame<MAX_LEDS>;

    /// Runtime left before the animation is exhausted.
    ///
    /// Zero means exhausted; the state transition is monotonic and only
    /// [`reset`](Animation::reset) reverses it.
    fn time_remaining(&self) -> Duration;

    /// Restore the initial state so the instance can be re-queued.
    fn reset(&mut self);
}

/// Animation slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum AnimationSlot<const MAX_LEDS: usize> {
    /// Whole-strip breathing envelope
    Breath(Breath<MAX_LEDS>),
    /// Rotating-hue rainbow
    Rainbow(Rainbow<MAX_LEDS>),
    /// Duty-cycle flash
    Strobe(Strobe<MAX_LEDS>),
}

impl<const MAX_LEDS: usize> AnimationSlot<MAX_LEDS> {
    /// Advance the animation by `dt`.
    pub fn update(&mut self, dt: Duration) {
        match self {
            Self::Breath(animation) => animation.update(dt),
            Self::Rainbow(animation) => animation.update(dt),
            Self::Strobe(animation) => animation.update(dt),
        }
    }

    /// The animation's current frame.
    pub fn frame(&self) -> &Frame<MAX_LEDS> {
        match self {
            Self::Breath(animation) => animation.frame(),
            Self::Rainbow(animation) => animation.frame(),
            Self::Strobe(animation) => animation.frame(),
        }
    }

    /// Runtime left before the animation is exhausted.
    pub fn time_remaining(&self) -> Duration {
        match self {
            Self::Breath(animation) => animation.time_remaining(),
            Self::Rainbow(animation) => animation.time_remaining(),
            Self::Strobe(animation) => animation.time_remaining(),
        }
    }

    /// Restore the initial state.
    pub fn reset(&mut self) {
        match self {
            Self::Breath(animation) => Animation::reset(animation),
            Self::Rainbow(animation) => Animation::reset(animation),
            Self::Strobe(animation) => Animation::reset(animation),
        }
    }
}

impl<const MAX_LEDS: usize> From<Breath<MAX_LEDS>> for AnimationSlot<MAX_LEDS> {
    fn from(animation: Breath<MAX_LEDS>) -> Self {
        Self::Breath(animation)
    }
}

impl<const MAX_LEDS: usize> From<Rainbow<MAX_LEDS>> for AnimationSlot<MAX_LEDS> {
    fn from(animation: Rainbow<MAX_LEDS>) -> Self {
        Self::Rainbow(animation)
    }
}

impl<const MAX_LEDS: usize> From<Strobe<MAX_LEDS>> for AnimationSlot<MAX_LEDS> {
    fn from(animation: Strobe<MAX_LEDS>) -> Self {
        Self::Strobe(animation)
    }
}

/// Elapsed time as float seconds, the unit the envelope math runs in.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn dt_secs(dt: Duration) -> f32 {
    dt.as_micros() as f32 / 1_000_000.0
}

/// Countdown step shared by every variant: subtract `dt`, floor at zero.
pub(crate) fn count_down(remaining: Duration, dt: Duration) -> Duration {
    remaining
        .checked_sub(dt)
        .unwrap_or(Duration::from_ticks(0))
}
