//! Draw engine: drains a FIFO of animations onto the two-wire protocol.

use embassy_time::Duration;
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputLine;
use crate::animation::AnimationSlot;
use crate::color::{ChannelOrder, channels_in_order};
use crate::frame::Frame;
use crate::stats::RunStats;
use crate::timer::Ticker;

/// Channel order transmitted inside each LED frame.
///
/// Pinned to the APA102C datasheet layout (blue, green, red after the
/// brightness byte) and never varied at runtime.
const WIRE_ORDER: ChannelOrder = ChannelOrder::Bgr;

/// Top three bits of every LED frame's leading byte.
const LED_FRAME_MARKER: u8 = 0xE0;

/// Draw engine for APA102C/SK9822 strips.
///
/// Owns the data and clock lines, a paced [`Ticker`], a FIFO of queued
/// [`AnimationSlot`]s and the run statistics. [`run`](Self::run) drains
/// the queue, driving each animation until its runtime is exhausted and
/// bit-banging every updated frame to the strip. The loop is the entire
/// occupancy of the calling thread until the queue is empty; the only
/// suspension point is the ticker's pacing wait.
///
/// `QUEUE` bounds the FIFO; a full queue hands the rejected animation
/// back from [`enqueue`](Self::enqueue).
pub struct Apa102Drawer<D, C, const MAX_LEDS: usize, const QUEUE: usize>
where
    D: OutputLine,
    C: OutputLine,
{
    data: D,
    clock: C,
    queue: Deque<AnimationSlot<MAX_LEDS>, QUEUE>,
    ticker: Ticker,
    known_len: usize,
    stats: RunStats,
}

impl<D, C, const MAX_LEDS: usize, const QUEUE: usize> Apa102Drawer<D, C, MAX_LEDS, QUEUE>
where
    D: OutputLine,
    C: OutputLine,
{
    /// Create a draw engine over the given lines.
    ///
    /// Both lines are driven low. `target_dt` paces the render loop to a
    /// fixed frame period; `None` renders as fast as updates allow.
    pub fn new(data: D, clock: C, target_dt: Option<Duration>) -> Self {
        let mut drawer = Self {
            data,
            clock,
            queue: Deque::new(),
            ticker: Ticker::new(target_dt),
            known_len: 0,
            stats: RunStats::new(),
        };
        drawer.set_lines_low();
        drawer
    }

    /// Append an animation to the back of the queue.
    ///
    /// Returns the animation if the queue is full.
    pub fn enqueue(
        &mut self,
        animation: impl Into<AnimationSlot<MAX_LEDS>>,
    ) -> Result<(), AnimationSlot<MAX_LEDS>> {
        self.queue.push_back(animation.into())
    }

    /// Number of animations waiting in the queue.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Drain the queue, rendering every animation to the strip.
    ///
    /// Resets the ticker and statistics, then runs each queued animation
    /// to exhaustion in FIFO order: one ticker ping, one update and one
    /// wire write per frame. Returns once the queue is empty; an empty
    /// queue is a no-op. Does not return early - an animation ends only
    /// by its own countdown reaching zero.
    pub fn run(&mut self) {
        self.ticker.reset();
        self.stats.reset();

        while let Some(mut animation) = self.queue.pop_front() {
            if animation.frame().len() > self.known_len {
                self.known_len = animation.frame().len();
            }

            while animation.time_remaining() > Duration::from_ticks(0) {
                let dt = self.ticker.ping();
                animation.update(dt);

                self.write_frame(animation.frame());
                self.stats.frame_rendered();
            }
        }

        self.stats.finish();

        #[cfg(feature = "esp32-log")]
        println!(
            "draw run: {} frames in {} ms ({} updates/s)",
            self.stats.frames(),
            self.stats.elapsed().as_millis(),
            self.stats.updates_per_second(),
        );
    }

    /// Blank the first `led_count` LEDs.
    ///
    /// Writes a complete start/LED/end sequence of black, zero-brightness
    /// LED frames, independent of the queue. Intended for safely turning
    /// the strip off when the engine is being torn down.
    pub fn stop(&mut self, led_count: usize) {
        self.start_frame();

        for _ in 0..led_count {
            self.write_byte(LED_FRAME_MARKER);
            self.write_byte(0x00);
            self.write_byte(0x00);
            self.write_byte(0x00);
        }

        self.end_frame(led_count);
    }

    /// Statistics of the most recent [`run`](Self::run).
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// The largest LED count rendered so far.
    pub fn known_len(&self) -> usize {
        self.known_len
    }

    fn set_lines_low(&mut self) {
        self.data.set_low();
        self.clock.set_low();
    }

    /// 32 zero bits opening every update.
    fn start_frame(&mut self) {
        self.set_lines_low();

        self.write_byte(0x00);
        self.write_byte(0x00);
        self.write_byte(0x00);
        self.write_byte(0x00);
    }

    /// Trailing filler: one byte per 16 LEDs, supplying the extra clock
    /// edges the downstream drivers' shift registers need.
    fn end_frame(&mut self, led_count: usize) {
        for _ in 0..(led_count >> 4) {
            self.write_byte(0x00);
        }
    }

    /// Shift one byte out MSB-first, latching each bit on a clock pulse.
    fn write_byte(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            if (byte >> bit) & 1 == 1 {
                self.data.set_high();
            } else {
                self.data.set_low();
            }
            self.clock.set_high();
            self.clock.set_low();
        }
    }

    /// Serialize one frame: start frame, one four-byte LED frame per
    /// LED, then the trailing filler sized by the largest strip seen.
    fn write_frame(&mut self, frame: &Frame<MAX_LEDS>) {
        self.start_frame();

        let brightness = LED_FRAME_MARKER | frame.brightness_code();
        for led in frame.leds() {
            self.write_byte(brightness);
            let [first, second, third] = channels_in_order(*led, WIRE_ORDER);
            self.write_byte(first);
            self.write_byte(second);
            self.write_byte(third);
        }

        self.end_frame(self.known_len.max(frame.len()));
    }
}
