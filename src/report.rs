use serde::Serialize;
use tonal_color::space::{Hsl, Hsv, Oklab, Oklch, Rgb};
use tonal_color::Color;

/// Serializable snapshot of everything known about a color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    pub hex: String,
    pub rgb_string: String,
    pub hsl_string: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub hsv: Hsv,
    pub oklab: Oklab,
    pub oklch: Oklch,
    pub brightness: f64,
    pub luminance: f64,
    pub is_dark: bool,
}

impl From<&Color> for ColorReport {
    fn from(color: &Color) -> Self {
        Self {
            hex: color.to_hex_string(),
            rgb_string: color.to_rgb_string(),
            hsl_string: color.to_hsl_string(),
            rgb: color.to_rgb(),
            hsl: color.to_hsl(),
            hsv: color.to_hsv(),
            oklab: color.to_oklab(),
            oklch: color.to_oklch(),
            brightness: color.brightness(),
            luminance: color.luminance(),
            is_dark: color.is_dark(),
        }
    }
}

/// WCAG contrast between two colors, with the usual pass levels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastReport {
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    /// Normal text, level AA (4.5:1)
    pub aa: bool,
    /// Large text, level AA (3:1)
    pub aa_large: bool,
    /// Normal text, level AAA (7:1)
    pub aaa: bool,
}

impl ContrastReport {
    pub fn new(foreground: &Color, background: &Color) -> Self {
        let ratio = foreground.contrast(background);
        Self {
            foreground: foreground.to_hex_string(),
            background: background.to_hex_string(),
            ratio,
            aa: ratio >= 4.5,
            aa_large: ratio >= 3.0,
            aaa: ratio >= 7.0,
        }
    }
}
