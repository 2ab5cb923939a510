//! Oklch, the polar form of Oklab.
//!
//! - **L** (Lightness): same as Oklab L
//! - **C** (Chroma): distance from the neutral axis
//! - **h** (Hue): angle in degrees
//!
//! The lightness ladders hold chroma and hue fixed and walk L, which is what
//! makes this the natural space for them.
//!
//! # Chroma limit
//!
//! [`oklab_to_oklch`] clamps chroma to `0..=0.5`. Real sRGB colors stay well
//! below that, so the clamp only matters for synthetic Oklab input.

use serde::{Deserialize, Serialize};

use super::math::clamp;
use super::oklab::{oklab_to_rgb, rgb_to_oklab, Oklab};
use super::rgb::{opaque, Rgb};

/// Upper bound for chroma in derived Oklch values.
pub const MAX_CHROMA: f64 = 0.5;

/// Oklch: Lightness, Chroma, Hue (degrees).
///
/// For achromatic colors the hue is undefined; conversions report `0.0` there
/// since `atan2(0, 0)` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white)
    pub l: f64,
    /// Chroma: 0.0 is gray
    pub c: f64,
    /// Hue angle in degrees, `0..360`
    pub h: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

impl Oklch {
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h, a: 1.0 }
    }

    /// Same hue and chroma at a different lightness.
    #[inline]
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }
}

/// Cartesian to polar.
///
/// Lightness is clamped to `0..=1` and chroma to `0..=`[`MAX_CHROMA`]; a
/// negative `atan2` angle has a full turn added.
pub fn oklab_to_oklch(l: f64, a: f64, b: f64) -> Oklch {
    let c = (a * a + b * b).sqrt();
    let mut h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h += 360.0;
    }

    Oklch::new(clamp(l, 0.0, 1.0), clamp(c, 0.0, MAX_CHROMA), h)
}

/// Polar to Cartesian. Lightness is clamped to `0..=1`; chroma is used as is.
pub fn oklch_to_oklab(l: f64, c: f64, h: f64) -> Oklab {
    let rad = h.to_radians();
    Oklab::new(clamp(l, 0.0, 1.0), c * rad.cos(), c * rad.sin())
}

/// Convert 0..=255 RGB channels straight to Oklch.
pub fn rgb_to_oklch(r: f64, g: f64, b: f64) -> Oklch {
    let lab = rgb_to_oklab(r, g, b);
    oklab_to_oklch(lab.l, lab.a, lab.b)
}

/// Convert Oklch to rounded, clamped 0..=255 RGB channels.
pub fn oklch_to_rgb(l: f64, c: f64, h: f64) -> Rgb {
    let lab = oklch_to_oklab(l, c, h);
    oklab_to_rgb(lab.l, lab.a, lab.b)
}
