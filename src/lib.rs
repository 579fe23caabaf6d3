#![no_std]

pub mod animation;
pub mod color;
pub mod drawer;
pub mod frame;
pub mod stats;
pub mod timer;

pub use animation::{Animation, AnimationSlot, Breath, BreathMode, Rainbow, Strobe};
pub use color::{ChannelOrder, Rgb};
pub use drawer::Apa102Drawer;
pub use frame::Frame;
pub use stats::RunStats;
pub use timer::Ticker;

pub use embassy_time::{Duration, Instant};

/// Abstract single-bit output line
///
/// Implement this trait for the GPIO pin type of your platform. The
/// wire encoder bit-bangs the APA102 protocol through two of these,
/// one for data and one for clock.
pub trait OutputLine {
    /// Drive the line high
    fn set_high(&mut self);

    /// Drive the line low
    fn set_low(&mut self);
}
