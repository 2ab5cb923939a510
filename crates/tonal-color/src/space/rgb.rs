//! RGB coordinates with alpha.

use serde::{Deserialize, Serialize};

pub(crate) fn opaque() -> f64 {
    1.0
}

/// An RGB color with alpha.
///
/// Channels are nominally `0..=255` and alpha `0..=1`, but the struct itself
/// does not enforce that: it doubles as the object-shaped input for
/// [`Color`](crate::Color), where out-of-range values are clamped on
/// construction rather than rejected.
///
/// Values produced by this crate's conversions are always rounded, in-range
/// integers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    /// Alpha, `1.0` when absent from the input.
    #[serde(default = "opaque")]
    pub a: f64,
}

impl Rgb {
    /// Create an opaque RGB value.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same channels with the given alpha.
    #[inline]
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r as f64, g as f64, b as f64)
    }
}
