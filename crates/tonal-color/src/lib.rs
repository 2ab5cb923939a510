#![allow(clippy::excessive_precision, clippy::module_inception)]

//! tonal-color: color values, color space math and tonal palette generation
//!
//! This library parses colors from the usual string and object notations,
//! converts between RGB, HSL, HSV, Oklab and Oklch, and generates tonal
//! palettes from a single seed color.
//!
//! # Quick Start
//!
//! ```
//! use tonal_color::{parse_color, Color};
//! use tonal_color::palette::{generate, GenerateOptions};
//!
//! let seed = parse_color("#1677ff").unwrap();
//! let colors = generate(&seed, &GenerateOptions::default());
//!
//! assert_eq!(colors.len(), 10);
//! assert_eq!(colors[5], "#1677ff");
//! ```
//!
//! # Color Values
//!
//! [`Color`] stores 8-bit RGB channels plus a floating point alpha. It is
//! immutable: [`lighten`](Color::lighten), [`mix`](Color::mix) and friends
//! return new colors. Derived forms are computed once per instance on first
//! use.
//!
//! Out-of-range input is never an error. `rgb(300, -5, 0)` is `#ff0000`.
//! Only input that matches none of the accepted shapes produces a
//! [`ParseError`].
//!
//! # Color Spaces
//!
//! The [`space`] module holds the plain value types and conversion functions:
//!
//! - [`Rgb`](space::Rgb): channels in `0..=255`
//! - [`Hsl`](space::Hsl) / [`Hsv`](space::Hsv): hue in degrees, the rest in `0..=1`
//! - [`Oklab`](space::Oklab) / [`Oklch`](space::Oklch): perceptual lightness
//!   with Cartesian or polar chroma
//!
//! ## Oklab without gamma decoding
//!
//! The Oklab transform here is applied directly to `channel / 255`, skipping
//! the sRGB transfer curve that textbook Oklab expects. The lightness values
//! it reports are therefore lower than a color-managed tool would show for
//! mid tones, and Oklch palettes come out darker. The reference palettes
//! this crate must reproduce were built that way, so this is kept as is.
//!
//! # Palette Algorithms
//!
//! ```text
//!  seed ──┬── HSV ladder ──────── 10 entries, seed at [5]
//!         │     └─ dark theme: blend into background
//!         ├── Oklch ladder ────── 11 entries, fixed L stops
//!         └── Oklch gradient ──── N entries, L from start to end
//! ```
//!
//! The HSV ladder reproduces the ant-design color palettes bit for bit. See
//! [`palette`] for details.

pub mod color;
pub mod palette;
pub mod space;

#[cfg(test)]
mod domain_tests;

pub use color::{
    parse_color, Color, ColorInput, ColorObject, ParseError, DEFAULT_ADJUST_AMOUNT,
    DEFAULT_MIX_AMOUNT,
};
pub use palette::{
    generate, generate_hsv_ladder, generate_oklch_gradient, generate_oklch_ladder, Algorithm,
    GenerateOptions, GradientOptions, HsvLadderOptions, Interpolation, Palette, PaletteGenerator,
    Theme,
};
