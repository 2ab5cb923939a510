//! Palette generation
//!
//! Three algorithms turn a seed color into an ordered list of `#rrggbb`
//! entries. They are distinguishable by output size alone:
//!
//! | Algorithm | Generator | Entries | Seed in output |
//! |-----------|-----------|---------|----------------|
//! | HSV ladder (ant-design) | [`HsvLadder`] | 10 | exactly, at index 5 (light theme) |
//! | Oklch ladder (Tailwind-style) | [`OklchLadder`] | 11 | no guarantee |
//! | Oklch gradient | [`OklchGradient`] | `steps` | no guarantee |
//!
//! # Architecture
//!
//! Each algorithm implements [`PaletteGenerator`]. [`GenerateOptions`] is the
//! tagged union over all three with their options, and is itself a generator,
//! which is what the [`generate`] dispatcher and catalog files use.
//!
//! All generators are deterministic: the same seed and options always give
//! the same output.

mod error;
mod gradient;
mod hsv_ladder;
mod oklch_ladder;
mod options;
mod palette;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;

pub use error::UnknownAlgorithm;
pub use gradient::{generate_oklch_gradient, OklchGradient};
pub use hsv_ladder::{generate_hsv_ladder, HsvLadder, HSV_LADDER_LEN, HSV_LADDER_SEED_INDEX};
pub use oklch_ladder::{
    generate_oklch_ladder, OklchLadder, OKLCH_LADDER_SEED_INDEX, OKLCH_LADDER_STOPS,
};
pub use options::{GradientOptions, HsvLadderOptions, Interpolation, Theme, DEFAULT_DARK_BACKGROUND};
pub use palette::Palette;

/// A palette generation algorithm.
pub trait PaletteGenerator {
    /// Generate lowercase `#rrggbb` entries for `seed`.
    fn generate(&self, seed: &Color) -> Vec<String>;

    /// Conventional position of the seed in the output, if any.
    fn seed_index(&self) -> Option<usize>;

    /// Generate and mark the primary entry.
    fn palette(&self, seed: &Color) -> Palette {
        Palette::with_seed_index(self.generate(seed), self.seed_index())
    }
}

/// Algorithm selector.
///
/// Parses from its kebab-case name, or from the older aliases `ant-design`
/// (HSV ladder), `tailwind` (Oklch ladder) and `oklch` (Oklch gradient).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    HsvLadder,
    OklchLadder,
    OklchGradient,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::HsvLadder,
        Algorithm::OklchLadder,
        Algorithm::OklchGradient,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::HsvLadder => "hsv-ladder",
            Algorithm::OklchLadder => "oklch-ladder",
            Algorithm::OklchGradient => "oklch-gradient",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hsv-ladder" | "ant-design" => Ok(Algorithm::HsvLadder),
            "oklch-ladder" | "tailwind" => Ok(Algorithm::OklchLadder),
            "oklch-gradient" | "oklch" => Ok(Algorithm::OklchGradient),
            _ => Err(UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// Algorithm plus its options, tagged by `algorithm`.
///
/// ```
/// use tonal_color::palette::{GenerateOptions, Theme};
///
/// let options: GenerateOptions =
///     serde_json::from_str(r#"{"algorithm": "hsv-ladder", "theme": "dark"}"#).unwrap();
/// assert!(matches!(options, GenerateOptions::HsvLadder(o) if o.theme == Theme::Dark));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "kebab-case")]
pub enum GenerateOptions {
    #[serde(alias = "ant-design")]
    HsvLadder(HsvLadderOptions),
    #[serde(alias = "tailwind")]
    OklchLadder,
    #[serde(alias = "oklch")]
    OklchGradient(GradientOptions),
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions::HsvLadder(HsvLadderOptions::default())
    }
}

impl GenerateOptions {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            GenerateOptions::HsvLadder(_) => Algorithm::HsvLadder,
            GenerateOptions::OklchLadder => Algorithm::OklchLadder,
            GenerateOptions::OklchGradient(_) => Algorithm::OklchGradient,
        }
    }
}

/// Default options for the algorithm.
impl From<Algorithm> for GenerateOptions {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::HsvLadder => GenerateOptions::HsvLadder(HsvLadderOptions::default()),
            Algorithm::OklchLadder => GenerateOptions::OklchLadder,
            Algorithm::OklchGradient => GenerateOptions::OklchGradient(GradientOptions::default()),
        }
    }
}

impl From<HsvLadderOptions> for GenerateOptions {
    fn from(options: HsvLadderOptions) -> Self {
        GenerateOptions::HsvLadder(options)
    }
}

impl From<GradientOptions> for GenerateOptions {
    fn from(options: GradientOptions) -> Self {
        GenerateOptions::OklchGradient(options)
    }
}

impl PaletteGenerator for GenerateOptions {
    fn generate(&self, seed: &Color) -> Vec<String> {
        match self {
            GenerateOptions::HsvLadder(options) => generate_hsv_ladder(seed, options),
            GenerateOptions::OklchLadder => generate_oklch_ladder(seed),
            GenerateOptions::OklchGradient(options) => generate_oklch_gradient(seed, options),
        }
    }

    fn seed_index(&self) -> Option<usize> {
        match self {
            GenerateOptions::HsvLadder(options) => HsvLadder::new(options.clone()).seed_index(),
            GenerateOptions::OklchLadder => OklchLadder.seed_index(),
            GenerateOptions::OklchGradient(options) => OklchGradient::new(*options).seed_index(),
        }
    }

    fn palette(&self, seed: &Color) -> Palette {
        match self {
            GenerateOptions::HsvLadder(options) => HsvLadder::new(options.clone()).palette(seed),
            GenerateOptions::OklchLadder => OklchLadder.palette(seed),
            GenerateOptions::OklchGradient(options) => OklchGradient::new(*options).palette(seed),
        }
    }
}

/// Generate a palette with the algorithm and options in `options`.
pub fn generate(seed: &Color, options: &GenerateOptions) -> Vec<String> {
    tracing::debug!(
        seed = %seed.to_hex_string(),
        algorithm = %options.algorithm(),
        "Generating palette"
    );
    options.generate(seed)
}
