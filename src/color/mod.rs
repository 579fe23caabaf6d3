//! Color type and conversions.
//!
//! The crate uses `smart_leds::RGB8` directly so frames can be handed to
//! any compatible driver. On top of that sit the constructors the
//! animations need: packed-code decoding in any channel permutation,
//! float HSV in degrees, uniform scaling and a random color source.

mod hsv;

use rand::RngCore;
use smart_leds::RGB8;

pub use hsv::{rgb_from_hsv, rgb_to_hsv};

pub type Rgb = RGB8;

/// Order of the three channels inside a packed 24-bit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgb,
    Rbg,
    Grb,
    Gbr,
    Brg,
    Bgr,
}

/// Decode a packed 24-bit color code.
///
/// The first channel named by `order` occupies bits 23..16, the second
/// bits 15..8, the third bits 7..0. Bits above 23 are ignored.
pub const fn rgb_from_code(code: u32, order: ChannelOrder) -> Rgb {
    let hi = ((code >> 16) & 0xFF) as u8;
    let mid = ((code >> 8) & 0xFF) as u8;
    let lo = (code & 0xFF) as u8;

    match order {
        ChannelOrder::Rgb => Rgb::new(hi, mid, lo),
        ChannelOrder::Rbg => Rgb::new(hi, lo, mid),
        ChannelOrder::Grb => Rgb::new(mid, hi, lo),
        ChannelOrder::Gbr => Rgb::new(lo, hi, mid),
        ChannelOrder::Brg => Rgb::new(mid, lo, hi),
        ChannelOrder::Bgr => Rgb::new(lo, mid, hi),
    }
}

/// Pack a color into a 24-bit code, inverse of [`rgb_from_code`].
pub const fn rgb_to_code(color: Rgb, order: ChannelOrder) -> u32 {
    let [hi, mid, lo] = channels_in_order(color, order);
    ((hi as u32) << 16) | ((mid as u32) << 8) | (lo as u32)
}

/// The three channel bytes of `color` in the given transmit order.
pub const fn channels_in_order(color: Rgb, order: ChannelOrder) -> [u8; 3] {
    match order {
        ChannelOrder::Rgb => [color.r, color.g, color.b],
        ChannelOrder::Rbg => [color.r, color.b, color.g],
        ChannelOrder::Grb => [color.g, color.r, color.b],
        ChannelOrder::Gbr => [color.g, color.b, color.r],
        ChannelOrder::Brg => [color.b, color.r, color.g],
        ChannelOrder::Bgr => [color.b, color.g, color.r],
    }
}

/// Scale every channel by `factor`, clamping to the 0-255 range.
///
/// Never wraps: oversized factors saturate at 255, negative factors
/// produce black.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_rgb(color: Rgb, factor: f32) -> Rgb {
    let scale = |channel: u8| (f32::from(channel) * factor).clamp(0.0, 255.0) as u8;

    Rgb {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

/// Draw a uniformly random color.
#[allow(clippy::cast_possible_truncation)]
pub fn random_rgb(rng: &mut impl RngCore) -> Rgb {
    let raw = rng.next_u32();

    Rgb::new((raw >> 16) as u8, (raw >> 8) as u8, raw as u8)
}
