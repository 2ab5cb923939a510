//! HSV tonal ladder.
//!
//! Ten entries around the seed: five lighter, the seed itself at index 5,
//! four darker. Each step nudges hue by 2°, and walks saturation and value by
//! fixed amounts, with everything rounded to two decimals before converting
//! back. Those roundings are what make the output match the ant-design
//! reference palettes exactly, so they must stay.
//!
//! The dark theme does not walk the other way. It blends ladder entries into
//! a dark background with a fixed table of (entry, amount) pairs.

use super::options::{HsvLadderOptions, Theme};
use super::palette::Palette;
use super::PaletteGenerator;
use crate::color::Color;
use crate::space::{clamp, round_to, Hsv};

const HUE_STEP: f64 = 2.0;
const SATURATION_STEP: f64 = 0.16;
const SATURATION_STEP_2: f64 = 0.05;
const BRIGHTNESS_STEP_1: f64 = 0.05;
const BRIGHTNESS_STEP_2: f64 = 0.15;
const LIGHT_COLOR_COUNT: u32 = 5;
const DARK_COLOR_COUNT: u32 = 4;

/// Number of entries in an HSV ladder.
pub const HSV_LADDER_LEN: usize = 10;

/// Position of the seed in a light-theme ladder.
pub const HSV_LADDER_SEED_INDEX: usize = 5;

/// Dark theme: (light-ladder index, percent mixed into the background).
const DARK_COLOR_MAP: [(usize, f64); HSV_LADDER_LEN] = [
    (7, 15.0),
    (6, 25.0),
    (5, 30.0),
    (5, 45.0),
    (5, 65.0),
    (5, 85.0),
    (4, 90.0),
    (3, 95.0),
    (2, 97.0),
    (1, 98.0),
];

fn hue(hsv: &Hsv, i: u32, light: bool) -> f64 {
    let base = hsv.h.round();
    let step = HUE_STEP * i as f64;

    // Cool hues (yellow-green through blue) turn the other way
    let hue = if (60.0..=240.0).contains(&base) {
        if light {
            base - step
        } else {
            base + step
        }
    } else if light {
        base + step
    } else {
        base - step
    };

    if hue < 0.0 {
        hue + 360.0
    } else if hue >= 360.0 {
        hue - 360.0
    } else {
        hue
    }
}

fn saturation(hsv: &Hsv, i: u32, light: bool) -> f64 {
    // True gray stays gray
    if hsv.h == 0.0 && hsv.s == 0.0 {
        return hsv.s;
    }

    let mut s = if light {
        hsv.s - SATURATION_STEP * i as f64
    } else if i == DARK_COLOR_COUNT {
        hsv.s + SATURATION_STEP
    } else {
        hsv.s + SATURATION_STEP_2 * i as f64
    };

    if s > 1.0 {
        s = 1.0;
    }
    if light && i == LIGHT_COLOR_COUNT && s > 0.1 {
        s = 0.1;
    }
    if s < 0.06 {
        s = 0.06;
    }

    round_to(s, 2)
}

fn value(hsv: &Hsv, i: u32, light: bool) -> f64 {
    let v = if light {
        hsv.v + BRIGHTNESS_STEP_1 * i as f64
    } else {
        hsv.v - BRIGHTNESS_STEP_2 * i as f64
    };
    round_to(clamp(v, 0.0, 1.0), 2)
}

fn step(hsv: &Hsv, i: u32, light: bool) -> Color {
    Color::from(Hsv::new(
        hue(hsv, i, light),
        saturation(hsv, i, light),
        value(hsv, i, light),
    ))
}

/// The ten light-theme entries as colors, seed included.
fn patterns(seed: &Color) -> Vec<Color> {
    let hsv = seed.to_hsv();

    let mut patterns = Vec::with_capacity(HSV_LADDER_LEN);
    patterns.extend((1..=LIGHT_COLOR_COUNT).rev().map(|i| step(&hsv, i, true)));
    patterns.push(seed.clone());
    patterns.extend((1..=DARK_COLOR_COUNT).map(|i| step(&hsv, i, false)));
    patterns
}

/// HSV ladder generator.
///
/// # Example
///
/// ```
/// use tonal_color::palette::{HsvLadder, PaletteGenerator};
/// use tonal_color::Color;
///
/// let seed: Color = "#1677ff".parse().unwrap();
/// let colors = HsvLadder::default().generate(&seed);
/// assert_eq!(colors.len(), 10);
/// assert_eq!(colors[0], "#e6f4ff");
/// assert_eq!(colors[5], "#1677ff");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HsvLadder {
    options: HsvLadderOptions,
}

impl HsvLadder {
    pub fn new(options: HsvLadderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HsvLadderOptions {
        &self.options
    }
}

impl PaletteGenerator for HsvLadder {
    fn generate(&self, seed: &Color) -> Vec<String> {
        tracing::trace!(
            seed = %seed.to_hex_string(),
            theme = ?self.options.theme,
            "Generating HSV ladder"
        );

        let patterns = patterns(seed);

        match self.options.theme {
            Theme::Light => patterns.iter().map(Color::to_rgb_hex_string).collect(),
            Theme::Dark => {
                let background = &self.options.background_color;
                DARK_COLOR_MAP
                    .iter()
                    .map(|&(index, amount)| {
                        background.mix(&patterns[index], amount).to_rgb_hex_string()
                    })
                    .collect()
            }
        }
    }

    fn seed_index(&self) -> Option<usize> {
        match self.options.theme {
            Theme::Light => Some(HSV_LADDER_SEED_INDEX),
            Theme::Dark => None,
        }
    }

    /// The primary is always the seed itself, also for the dark theme where
    /// it does not appear in the list.
    fn palette(&self, seed: &Color) -> Palette {
        Palette::new(self.generate(seed)).primary(seed.to_rgb_hex_string())
    }
}

/// Ten-entry HSV ladder for `seed`.
pub fn generate_hsv_ladder(seed: &Color, options: &HsvLadderOptions) -> Vec<String> {
    HsvLadder::new(options.clone()).generate(seed)
}
