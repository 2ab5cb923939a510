//! Fixed-lightness Oklch ladder.
//!
//! Eleven entries at fixed Oklch lightness stops (`50` through `950` in
//! Tailwind naming), all sharing the seed's hue and chroma. Chroma is reduced
//! near the ends of the range, and very dark seeds get a small hue shift in
//! their light entries.
//!
//! The seed's own lightness plays no part in where the stops sit, so the
//! entry at index 5 is usually *not* the seed.

use super::PaletteGenerator;
use crate::color::Color;
use crate::space::Oklch;

/// Oklch lightness of each entry, lightest first.
pub const OKLCH_LADDER_STOPS: [f64; 11] = [0.98, 0.95, 0.9, 0.8, 0.6, 0.5, 0.4, 0.3, 0.2, 0.1, 0.05];

/// Conventional seed position (the `500` entry).
pub const OKLCH_LADDER_SEED_INDEX: usize = 5;

fn hue_shift(l: f64, base_l: f64) -> f64 {
    if base_l < 0.2 && l > 0.8 {
        -10.0
    } else if base_l < 0.2 && l > 0.6 {
        -5.0
    } else {
        0.0
    }
}

fn chroma_shift(l: f64, base_c: f64) -> f64 {
    if l > 0.9 || l < 0.1 {
        -base_c * 0.4
    } else if l > 0.8 || l < 0.2 {
        -base_c * 0.2
    } else {
        0.0
    }
}

/// Oklch fixed-lightness ladder generator.
///
/// Has no options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OklchLadder;

impl PaletteGenerator for OklchLadder {
    fn generate(&self, seed: &Color) -> Vec<String> {
        let base = seed.to_oklch();
        tracing::trace!(
            seed = %seed.to_hex_string(),
            l = base.l,
            c = base.c,
            h = base.h,
            "Generating Oklch ladder"
        );

        OKLCH_LADDER_STOPS
            .iter()
            .map(|&l| {
                let h = base.h + hue_shift(l, base.l);
                let c = (base.c + chroma_shift(l, base.c)).max(0.0);
                Color::from(Oklch::new(l, c, h)).to_rgb_hex_string()
            })
            .collect()
    }

    fn seed_index(&self) -> Option<usize> {
        Some(OKLCH_LADDER_SEED_INDEX)
    }
}

/// Eleven-entry Oklch ladder for `seed`.
pub fn generate_oklch_ladder(seed: &Color) -> Vec<String> {
    OklchLadder.generate(seed)
}
