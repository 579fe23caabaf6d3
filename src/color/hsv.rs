//! Float HSV conversions.
//!
//! Hue is measured in degrees and wrapped into `[0, 360)`; saturation
//! and value live in `[0, 1]`. The integer 0-255 hue circle used by
//! hardware-oriented libraries is too coarse for slow rainbow sweeps,
//! so the animations work in degrees and convert per LED.

use libm::{fabsf, fmodf, roundf};

use super::Rgb;

/// Wrap a hue in degrees into `[0, 360)`. Negative hues wrap upward.
fn wrap_hue(h: f32) -> f32 {
    let h = fmodf(h, 360.0);
    if h < 0.0 { h + 360.0 } else { h }
}

/// Convert HSV to RGB.
///
/// Standard six-sector conversion: the sector selects which channel
/// carries the chroma `c`, the ramp `x` or zero, all offset by
/// `m = v - c`. Channels are rounded, not truncated.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_from_hsv(h: f32, s: f32, v: f32) -> Rgb {
    let h = wrap_hue(h);

    let c = v * s;
    let x = c * (1.0 - fabsf(fmodf(h / 60.0, 2.0) - 1.0));
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb::new(
        roundf((r + m) * 255.0) as u8,
        roundf((g + m) * 255.0) as u8,
        roundf((b + m) * 255.0) as u8,
    )
}

/// Convert RGB to HSV, the inverse of [`rgb_from_hsv`].
///
/// Achromatic colors report a hue of 0 by convention. The returned hue
/// is always in `[0, 360)`.
pub fn rgb_to_hsv(color: Rgb) -> (f32, f32, f32) {
    let r = f32::from(color.r) / 255.0;
    let g = f32::from(color.g) / 255.0;
    let b = f32::from(color.b) / 255.0;

    let max = r.max(g.max(b));
    let min = r.min(g.min(b));
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        wrap_hue(60.0 * ((g - b) / delta))
    } else if max == g {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };

    let s = if max == 0.0 { 0.0 } else { delta / max };

    (h, s, max)
}
