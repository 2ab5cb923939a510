//! Color space value types and conversions.
//!
//! Every conversion is a total function over `f64`: out-of-range input is
//! clamped or wrapped, never rejected. Conversions that land in RGB return
//! rounded channels in `0..=255`.
//!
//! | Space | Type | Components |
//! |-------|------|------------|
//! | RGB | [`Rgb`] | `r, g, b` in `0..=255` |
//! | HSL | [`Hsl`] | `h` degrees, `s, l` in `0..=1` |
//! | HSV | [`Hsv`] | `h` degrees, `s, v` in `0..=1` |
//! | Oklab | [`Oklab`] | `l` in `0..=1`, `a, b` roughly `-0.5..=0.5` |
//! | Oklch | [`Oklch`] | `l` in `0..=1`, `c` in `0..=0.5`, `h` degrees |

mod hsl;
mod hsv;
mod math;
mod oklab;
mod oklch;
mod rgb;

pub use hsl::{hsl_to_rgb, rgb_to_hsl, Hsl};
pub use hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};
pub use math::{
    clamp, ease_in_out, lerp, limit_alpha, limit_range, normalize_hue, round_to, to_channel,
};
pub use oklab::{oklab_to_rgb, rgb_to_oklab, Oklab};
pub use oklch::{oklab_to_oklch, oklch_to_oklab, oklch_to_rgb, rgb_to_oklch, Oklch, MAX_CHROMA};
pub use rgb::Rgb;
