//! Generator options.
//!
//! Both option structs follow the same builder pattern and deserialize with
//! every field optional, so a catalog entry only names what it changes.
//! Unknown keys are rejected. The camelCase names `backgroundColor`, `startL`
//! and `endL` are accepted as aliases.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Which end of the HSV ladder is anchored to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// Plain ladder, lightest first.
    #[default]
    Light,
    /// Ladder entries blended into a dark background.
    Dark,
}

/// How gradient lightness moves from `start_l` to `end_l`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interpolation {
    /// Even steps.
    Linear,
    /// Cubic ease-in-out: tighter steps near both ends.
    #[default]
    EaseInOut,
}

/// Background used by the dark theme when none is given.
pub const DEFAULT_DARK_BACKGROUND: [u8; 3] = [0x14, 0x14, 0x14];

fn default_background() -> Color {
    let [r, g, b] = DEFAULT_DARK_BACKGROUND;
    Color::new(r, g, b)
}

/// Options for the HSV ladder.
///
/// # Defaults
///
/// - Theme: [`Theme::Light`]
/// - Background: `#141414` (only used by the dark theme)
///
/// # Example
///
/// ```
/// use tonal_color::palette::{HsvLadderOptions, Theme};
/// use tonal_color::Color;
///
/// let options = HsvLadderOptions::new()
///     .theme(Theme::Dark)
///     .background_color(Color::new(0, 0, 0));
/// assert_eq!(options.theme, Theme::Dark);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HsvLadderOptions {
    pub theme: Theme,
    /// Page background the dark theme blends into.
    #[serde(alias = "background", alias = "backgroundColor")]
    pub background_color: Color,
}

impl Default for HsvLadderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            background_color: default_background(),
        }
    }
}

impl HsvLadderOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[inline]
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }
}

/// Options for the Oklch gradient.
///
/// # Defaults
///
/// - Steps: `10`
/// - Lightness from `0.95` down to `0.10`
/// - Interpolation: [`Interpolation::EaseInOut`]
///
/// `start_l` may be lower than `end_l` for a dark-to-light gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradientOptions {
    /// Number of entries produced.
    pub steps: usize,
    /// Oklch lightness of the first entry.
    #[serde(alias = "startL")]
    pub start_l: f64,
    /// Oklch lightness of the last entry.
    #[serde(alias = "endL")]
    pub end_l: f64,
    pub interpolation: Interpolation,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            steps: 10,
            start_l: 0.95,
            end_l: 0.10,
            interpolation: Interpolation::EaseInOut,
        }
    }
}

impl GradientOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Set both lightness endpoints.
    #[inline]
    pub fn lightness(mut self, start_l: f64, end_l: f64) -> Self {
        self.start_l = start_l;
        self.end_l = end_l;
        self
    }

    #[inline]
    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }
}
