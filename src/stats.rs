//! Run statistics for the draw engine.

use embassy_time::{Duration, Instant};

/// Frame counter and elapsed-time record for one draw run.
///
/// Reset at the start of every [`run`](crate::Apa102Drawer::run) and
/// stamped when the queue drains.
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    start: Instant,
    end: Instant,
    frames: u64,
}

impl RunStats {
    pub fn new() -> Self {
        let now = Instant::now();

        Self {
            start: now,
            end: now,
            frames: 0,
        }
    }

    /// Restart the record from "now" with a zero frame count.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Record one rendered frame.
    pub fn frame_rendered(&mut self) {
        self.frames += 1;
    }

    /// Stamp the end of the run.
    pub fn finish(&mut self) {
        self.end = Instant::now();
    }

    /// Frames rendered since the last reset.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Wall time between reset and finish.
    pub fn elapsed(&self) -> Duration {
        self.end - self.start
    }

    /// Average rendered frames per second over the run.
    ///
    /// Returns 0 for an empty or unfinished run.
    #[allow(clippy::cast_precision_loss)]
    pub fn updates_per_second(&self) -> f32 {
        let micros = self.elapsed().as_micros();
        if micros == 0 {
            return 0.0;
        }

        self.frames as f32 / (micros as f32 / 1_000_000.0)
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}
