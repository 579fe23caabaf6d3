//! Frame pacing.

use embassy_time::{Duration, Instant};

/// Wall-clock tick source with optional frame pacing.
///
/// Each [`ping`](Ticker::ping) reports the time elapsed since the
/// previous one. With a target period set, `ping` spins on the clock
/// until at least that much time has passed, so a render loop built
/// around it never runs faster than the target rate. The spin is
/// deliberate: the intended targets are bare-metal control loops with no
/// scheduler to yield to. When a tick overruns the target, the true,
/// larger elapsed time is reported; there is no catch-up.
#[derive(Debug, Clone)]
pub struct Ticker {
    previous: Instant,
    current: Instant,
    target: Option<Duration>,
}

impl Ticker {
    /// Create a ticker, optionally pacing to `target` per tick.
    pub fn new(target: Option<Duration>) -> Self {
        let now = Instant::now();

        Self {
            previous: now,
            current: now,
            target,
        }
    }

    /// Advance to the next tick and return the elapsed time.
    ///
    /// Busy-waits until the target period has elapsed, when one is set.
    pub fn ping(&mut self) -> Duration {
        self.previous = self.current;

        if let Some(target) = self.target {
            loop {
                self.current = Instant::now();
                if self.current - self.previous >= target {
                    break;
                }
            }
        } else {
            self.current = Instant::now();
        }

        self.current - self.previous
    }

    /// Restart timing from "now", as when a draw cycle begins.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.previous = now;
        self.current = now;
    }

    /// The configured target tick period, if any.
    pub fn target(&self) -> Option<Duration> {
        self.target
    }
}
