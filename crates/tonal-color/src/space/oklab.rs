//! Oklab perceptual color space
//!
//! Oklab is the Cartesian form of the perceptual space the lightness ladders
//! are built in. See [`Oklch`](super::Oklch) for the polar form.
//!
//! # Gamma
//!
//! The forward transform feeds the 0..=1 normalized channels straight into
//! the LMS matrix, without decoding the sRGB transfer curve first. The
//! reference palettes this crate reproduces were generated that way, so the
//! shortcut is kept on purpose: "fixing" it changes every OKLCH palette.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use serde::{Deserialize, Serialize};

use super::math::clamp;
use super::rgb::{opaque, Rgb};

/// A color in Oklab perceptual color space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 1.0 = white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
/// - `alpha`: Opacity. Named `alpha` because `a` is taken by the green-red axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklab {
    /// Lightness: 0.0 (black) to 1.0 (white)
    pub l: f64,
    /// Green-red axis: typically -0.5 to 0.5
    pub a: f64,
    /// Blue-yellow axis: typically -0.5 to 0.5
    pub b: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

impl Oklab {
    /// Create a new opaque Oklab color.
    ///
    /// # Example
    ///
    /// ```
    /// use tonal_color::space::Oklab;
    ///
    /// // Mid-gray: neutral, no chroma
    /// let gray = Oklab::new(0.5, 0.0, 0.0);
    /// assert_eq!(gray.alpha, 1.0);
    /// ```
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self {
            l,
            a,
            b,
            alpha: 1.0,
        }
    }
}

/// Convert 0..=255 RGB channels to Oklab.
///
/// Uses the 2021-01-25 matrices from Björn Ottosson.
pub fn rgb_to_oklab(r: f64, g: f64, b: f64) -> Oklab {
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);

    // Step 1: RGB to LMS (M1 matrix)
    let l = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
    let m = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
    let s = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;

    // Step 2: Cube root (nonlinearity)
    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    // Step 3: LMS to Lab (M2 matrix)
    Oklab::new(
        0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
        1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
        0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
    )
}

/// Convert Oklab to rounded 0..=255 RGB channels.
///
/// Out-of-gamut results are clamped per channel after rounding.
pub fn oklab_to_rgb(l: f64, a: f64, b: f64) -> Rgb {
    // Step 1: Lab to LMS (inverse M2)
    let l_ = l + 0.3963377774 * a + 0.2158037573 * b;
    let m_ = l - 0.1055613458 * a - 0.0638541728 * b;
    let s_ = l - 0.0894841775 * a - 1.2914855480 * b;

    // Step 2: Cube (reverse nonlinearity)
    let l3 = l_ * l_ * l_;
    let m3 = m_ * m_ * m_;
    let s3 = s_ * s_ * s_;

    // Step 3: LMS to RGB (inverse M1)
    let r = 4.0767416621 * l3 - 3.3077115913 * m3 + 0.2309699292 * s3;
    let g = -1.2684380046 * l3 + 2.6097574011 * m3 - 0.3413193965 * s3;
    let b = -0.0041960863 * l3 - 0.7034186147 * m3 + 1.7076147010 * s3;

    Rgb::new(
        clamp((r * 255.0).round(), 0.0, 255.0),
        clamp((g * 255.0).round(), 0.0, 255.0),
        clamp((b * 255.0).round(), 0.0, 255.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tolerance for palette crate comparison (its matrices carry more digits)
    const PALETTE_TOLERANCE: f64 = 1e-4;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_oklab_matches_palette_crate() {
        use palette::{IntoColor, LinSrgb, Oklab as PaletteOklab};

        // Primaries, white, black, mid-gray, seed blue
        let test_colors = [
            (255.0, 0.0, 0.0),
            (0.0, 255.0, 0.0),
            (0.0, 0.0, 255.0),
            (128.0, 128.0, 128.0),
            (255.0, 255.0, 255.0),
            (0.0, 0.0, 0.0),
            (22.0, 119.0, 255.0),
        ];

        for (r, g, b) in test_colors {
            let ours = rgb_to_oklab(r, g, b);

            // No transfer curve on our side, so compare against linear input
            let linear: LinSrgb<f64> = LinSrgb::new(r / 255.0, g / 255.0, b / 255.0);
            let theirs: PaletteOklab<f64> = linear.into_color();

            assert!(
                approx_eq(ours.l, theirs.l, PALETTE_TOLERANCE),
                "L mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.l,
                theirs.l
            );
            assert!(
                approx_eq(ours.a, theirs.a, PALETTE_TOLERANCE),
                "a mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.a,
                theirs.a
            );
            assert!(
                approx_eq(ours.b, theirs.b, PALETTE_TOLERANCE),
                "b mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.b,
                theirs.b
            );
        }
    }

    #[test]
    fn test_oklab_known_values() {
        let white = rgb_to_oklab(255.0, 255.0, 255.0);
        assert!(approx_eq(white.l, 1.0, 1e-6), "White L = {}", white.l);
        assert!(approx_eq(white.a, 0.0, 1e-6), "White a = {}", white.a);
        assert!(approx_eq(white.b, 0.0, 1e-6), "White b = {}", white.b);

        let black = rgb_to_oklab(0.0, 0.0, 0.0);
        assert_eq!((black.l, black.a, black.b), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_round_trip_recovers_channels() {
        let test_colors = [
            (255.0, 0.0, 0.0),
            (0.0, 255.0, 0.0),
            (0.0, 0.0, 255.0),
            (255.0, 255.0, 0.0),
            (255.0, 128.0, 64.0),
            (22.0, 119.0, 255.0),
            (64.0, 64.0, 64.0),
            (255.0, 255.0, 255.0),
            (0.0, 0.0, 0.0),
        ];

        for (r, g, b) in test_colors {
            let lab = rgb_to_oklab(r, g, b);
            let back = oklab_to_rgb(lab.l, lab.a, lab.b);
            assert_eq!(back, Rgb::new(r, g, b), "round trip failed for ({r}, {g}, {b})");
        }
    }

    #[test]
    fn test_out_of_gamut_is_clamped() {
        let rgb = oklab_to_rgb(1.2, 0.4, 0.4);
        for channel in [rgb.r, rgb.g, rgb.b] {
            assert!((0.0..=255.0).contains(&channel), "channel {channel} out of range");
        }
        assert_eq!(oklab_to_rgb(-0.5, 0.0, 0.0), Rgb::new(0.0, 0.0, 0.0));
    }
}
