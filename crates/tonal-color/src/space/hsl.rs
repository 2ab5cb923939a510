//! HSL (hue, saturation, lightness) cylindrical model.

use serde::{Deserialize, Serialize};

use super::math::{clamp, normalize_hue};
use super::rgb::{opaque, Rgb};

/// A color in HSL.
///
/// - `h`: hue in degrees, `0..360`
/// - `s`: saturation, `0..=1`
/// - `l`: lightness, `0..=1`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

impl Hsl {
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l, a: 1.0 }
    }
}

/// Hue in degrees from normalized channels, using the max-channel branch.
///
/// `d` is `max - min` and must be non-zero. Red wins ties, then green.
pub(crate) fn hue_degrees(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    let h = if max == r {
        ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };
    h * 360.0
}

/// Convert 0..=255 RGB channels to HSL.
///
/// Achromatic input (`max == min`) yields `h = 0, s = 0`.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Hsl {
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    Hsl::new(hue_degrees(r, g, b, max, d), s, l)
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = ((t % 1.0) + 1.0) % 1.0;
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Convert HSL to rounded 0..=255 RGB channels.
///
/// Hue is wrapped into `0..360`; saturation and lightness are clamped to
/// `0..=1` first.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = normalize_hue(h);
    let s = clamp(s, 0.0, 1.0);
    let l = clamp(l, 0.0, 1.0);

    if s == 0.0 {
        let v = (l * 255.0).round();
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        (hue_to_channel(p, q, h / 360.0 + 1.0 / 3.0) * 255.0).round(),
        (hue_to_channel(p, q, h / 360.0) * 255.0).round(),
        (hue_to_channel(p, q, h / 360.0 - 1.0 / 3.0) * 255.0).round(),
    )
}
