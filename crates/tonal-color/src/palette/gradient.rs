//! Continuous Oklch lightness gradient.
//!
//! `steps` entries with the seed's chroma and hue, lightness running from
//! `start_l` to `end_l`. With [`Interpolation::EaseInOut`] the steps bunch up
//! near both ends.

use super::options::{GradientOptions, Interpolation};
use super::PaletteGenerator;
use crate::color::Color;
use crate::space::{ease_in_out, lerp, Oklch};

/// Oklch gradient generator.
///
/// # Edge cases
///
/// - `steps == 0` yields an empty list
/// - `steps == 1` yields a single entry at `start_l`
///
/// # Example
///
/// ```
/// use tonal_color::palette::{GradientOptions, OklchGradient, PaletteGenerator};
/// use tonal_color::Color;
///
/// let seed: Color = "#1677ff".parse().unwrap();
/// let colors = OklchGradient::new(GradientOptions::new().steps(5)).generate(&seed);
/// assert_eq!(colors.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OklchGradient {
    options: GradientOptions,
}

impl OklchGradient {
    pub fn new(options: GradientOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GradientOptions {
        &self.options
    }

    /// Lightness of entry `i`.
    fn lightness(&self, i: usize) -> f64 {
        let GradientOptions {
            steps,
            start_l,
            end_l,
            interpolation,
        } = self.options;

        if steps < 2 {
            return start_l;
        }

        let t = i as f64 / (steps - 1) as f64;
        let t = match interpolation {
            Interpolation::EaseInOut => ease_in_out(t),
            Interpolation::Linear => t,
        };
        lerp(start_l, end_l, t)
    }
}

impl PaletteGenerator for OklchGradient {
    fn generate(&self, seed: &Color) -> Vec<String> {
        let base = seed.to_oklch();
        tracing::trace!(
            seed = %seed.to_hex_string(),
            steps = self.options.steps,
            interpolation = ?self.options.interpolation,
            "Generating Oklch gradient"
        );

        (0..self.options.steps)
            .map(|i| Color::from(Oklch::new(self.lightness(i), base.c, base.h)).to_rgb_hex_string())
            .collect()
    }

    fn seed_index(&self) -> Option<usize> {
        None
    }
}

/// `options.steps` entries of an Oklch lightness gradient for `seed`.
pub fn generate_oklch_gradient(seed: &Color, options: &GradientOptions) -> Vec<String> {
    OklchGradient::new(*options).generate(seed)
}
