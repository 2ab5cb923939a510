//! HSV (hue, saturation, value) cylindrical model.

use serde::{Deserialize, Serialize};

use super::hsl::hue_degrees;
use super::math::{clamp, normalize_hue};
use super::rgb::{opaque, Rgb};

/// A color in HSV.
///
/// - `h`: hue in degrees, `0..360`
/// - `s`: saturation, `0..=1`
/// - `v`: value, `0..=1`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

impl Hsv {
    #[inline]
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v, a: 1.0 }
    }
}

/// Convert 0..=255 RGB channels to HSV.
///
/// Saturation is zero for black; hue is zero for any achromatic input.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> Hsv {
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = if max == min {
        0.0
    } else {
        hue_degrees(r, g, b, max, d)
    };

    Hsv::new(h, s, max)
}

/// Convert HSV to rounded 0..=255 RGB channels.
///
/// Hue is wrapped into `0..360`; saturation and value are clamped to `0..=1`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = normalize_hue(h);
    let s = clamp(s, 0.0, 1.0);
    let v = clamp(v, 0.0, 1.0);

    let sector = (h / 60.0).floor();
    let f = h / 60.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector as i64 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(
        (r * 255.0).round(),
        (g * 255.0).round(),
        (b * 255.0).round(),
    )
}
