//! The canonical color value.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ParseError;
use super::input::{parse_color, ColorInput, ColorObject};
use super::parse::parse_str;
use crate::space::{
    clamp, hsl_to_rgb, hsv_to_rgb, limit_alpha, oklab_to_oklch, oklab_to_rgb, oklch_to_rgb,
    rgb_to_hsl, rgb_to_hsv, rgb_to_oklab, to_channel, Hsl, Hsv, Oklab, Oklch, Rgb,
};

/// Default percentage for `lighten`, `darken`, `saturate`, `desaturate`,
/// `tint` and `shade`.
pub const DEFAULT_ADJUST_AMOUNT: f64 = 10.0;

/// Default percentage for [`Color::mix`].
pub const DEFAULT_MIX_AMOUNT: f64 = 50.0;

/// Derived forms, each computed on first access.
#[derive(Debug, Clone, Default)]
struct Derived {
    hsl: OnceLock<Hsl>,
    hsv: OnceLock<Hsv>,
    oklab: OnceLock<Oklab>,
    oklch: OnceLock<Oklch>,
    brightness: OnceLock<f64>,
    luminance: OnceLock<f64>,
}

/// An sRGB color with 8-bit channels and a floating point alpha.
///
/// Channels are always in `0..=255` and alpha in `0..=1`: every constructor
/// rounds and clamps instead of failing. A `Color` never changes after
/// construction; transformations return new values.
///
/// Derived representations (HSL, HSV, Oklab, Oklch, brightness, luminance)
/// are computed lazily and cached per instance. The cache is thread-safe, so
/// a `Color` can be shared freely.
///
/// # Example
///
/// ```
/// use tonal_color::Color;
///
/// let blue: Color = "#1677ff".parse().unwrap();
/// assert_eq!(blue.to_rgb_string(), "rgb(22,119,255)");
/// assert_eq!(blue.darken(10.0).to_hex_string(), "#005ee2");
/// ```
#[derive(Debug, Clone)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: f64,
    derived: Derived,
}

impl Color {
    /// Create an opaque color from 8-bit channels.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self::from_parts(r, g, b, 1.0)
    }

    /// Create a color from unbounded channel values.
    ///
    /// Channels are rounded and clamped to `0..=255`, alpha is clamped to
    /// `0..=1`.
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::from_parts(to_channel(r), to_channel(g), to_channel(b), limit_alpha(a))
    }

    fn from_parts(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a,
            derived: Derived::default(),
        }
    }

    /// Same channels, different alpha (clamped to `0..=1`).
    pub fn with_alpha(&self, a: f64) -> Self {
        Self::from_parts(self.r, self.g, self.b, limit_alpha(a))
    }

    #[inline]
    pub fn r(&self) -> u8 {
        self.r
    }

    #[inline]
    pub fn g(&self) -> u8 {
        self.g
    }

    #[inline]
    pub fn b(&self) -> u8 {
        self.b
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        self.a
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// `#rrggbb`, or `#rrggbbaa` when the color is translucent.
    pub fn to_hex_string(&self) -> String {
        if self.a < 1.0 {
            format!(
                "{}{:02x}",
                self.to_rgb_hex_string(),
                to_channel(self.a * 255.0)
            )
        } else {
            self.to_rgb_hex_string()
        }
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_rgb_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgb(r,g,b)`, or `rgba(r,g,b,a)` when translucent.
    pub fn to_rgb_string(&self) -> String {
        if self.a < 1.0 {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        } else {
            format!("rgb({},{},{})", self.r, self.g, self.b)
        }
    }

    /// `hsl(h,s%,l%)`, or `hsla(h,s%,l%,a)` when translucent.
    ///
    /// Hue, saturation and lightness are rounded to whole numbers.
    pub fn to_hsl_string(&self) -> String {
        let hsl = self.to_hsl();
        let h = hsl.h.round() as i64;
        let s = (hsl.s * 100.0).round() as i64;
        let l = (hsl.l * 100.0).round() as i64;
        if self.a < 1.0 {
            format!("hsla({h},{s}%,{l}%,{})", self.a)
        } else {
            format!("hsl({h},{s}%,{l}%)")
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        Rgb::from([self.r, self.g, self.b]).with_alpha(self.a)
    }

    pub fn to_hsl(&self) -> Hsl {
        *self.derived.hsl.get_or_init(|| Hsl {
            a: self.a,
            ..rgb_to_hsl(self.r as f64, self.g as f64, self.b as f64)
        })
    }

    pub fn to_hsv(&self) -> Hsv {
        *self.derived.hsv.get_or_init(|| Hsv {
            a: self.a,
            ..rgb_to_hsv(self.r as f64, self.g as f64, self.b as f64)
        })
    }

    pub fn to_oklab(&self) -> Oklab {
        *self.derived.oklab.get_or_init(|| Oklab {
            alpha: self.a,
            ..rgb_to_oklab(self.r as f64, self.g as f64, self.b as f64)
        })
    }

    pub fn to_oklch(&self) -> Oklch {
        *self.derived.oklch.get_or_init(|| {
            let lab = self.to_oklab();
            Oklch {
                a: self.a,
                ..oklab_to_oklch(lab.l, lab.a, lab.b)
            }
        })
    }

    // ========================================================================
    // Transformations
    // ========================================================================

    /// Raise HSL lightness by `amount` percentage points.
    pub fn lighten(&self, amount: f64) -> Self {
        let hsl = self.to_hsl();
        Self::from(Hsl {
            l: clamp(hsl.l + amount / 100.0, 0.0, 1.0),
            ..hsl
        })
    }

    /// Lower HSL lightness by `amount` percentage points.
    pub fn darken(&self, amount: f64) -> Self {
        self.lighten(-amount)
    }

    /// Raise HSL saturation by `amount` percentage points.
    pub fn saturate(&self, amount: f64) -> Self {
        let hsl = self.to_hsl();
        Self::from(Hsl {
            s: clamp(hsl.s + amount / 100.0, 0.0, 1.0),
            ..hsl
        })
    }

    /// Lower HSL saturation by `amount` percentage points.
    pub fn desaturate(&self, amount: f64) -> Self {
        self.saturate(-amount)
    }

    /// Move `amount` percent of the way towards `other`.
    ///
    /// Interpolates the stored channels and alpha linearly. This is not a
    /// gamma-correct blend.
    pub fn mix(&self, other: &Color, amount: f64) -> Self {
        let p = amount / 100.0;
        let channel = |from: u8, to: u8| {
            let from = from as f64;
            (from + (to as f64 - from) * p).round()
        };

        Self::from_rgba(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
            self.a + (other.a - self.a) * p,
        )
    }

    /// [`mix`](Self::mix) with any input [`parse_color`] accepts.
    ///
    /// ```
    /// use tonal_color::Color;
    ///
    /// let red = Color::new(255, 0, 0);
    /// assert_eq!(red.mix_with("#0000ff", 50.0).unwrap().to_hex_string(), "#800080");
    /// ```
    pub fn mix_with(&self, other: impl Into<ColorInput>, amount: f64) -> Result<Self, ParseError> {
        Ok(self.mix(&parse_color(other)?, amount))
    }

    /// Mix with opaque white.
    pub fn tint(&self, amount: f64) -> Self {
        self.mix(&Color::new(255, 255, 255), amount)
    }

    /// Mix with opaque black.
    pub fn shade(&self, amount: f64) -> Self {
        self.mix(&Color::new(0, 0, 0), amount)
    }

    /// BT.601 luma on all three channels, alpha kept.
    pub fn grayscale(&self) -> Self {
        let gray = (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64).round();
        Self::from_rgba(gray, gray, gray, self.a)
    }

    // ========================================================================
    // Metrics
    // ========================================================================

    /// Perceived brightness, `(299 r + 587 g + 114 b) / 1000`, in `0..=255`.
    pub fn brightness(&self) -> f64 {
        *self.derived.brightness.get_or_init(|| {
            (self.r as f64 * 299.0 + self.g as f64 * 587.0 + self.b as f64 * 114.0) / 1000.0
        })
    }

    /// WCAG relative luminance in `0..=1`.
    pub fn luminance(&self) -> f64 {
        *self.derived.luminance.get_or_init(|| {
            let decode = |c: u8| {
                let v = c as f64 / 255.0;
                if v <= 0.03928 {
                    v / 12.92
                } else {
                    ((v + 0.055) / 1.055).powf(2.4)
                }
            };
            0.2126 * decode(self.r) + 0.7152 * decode(self.g) + 0.0722 * decode(self.b)
        })
    }

    /// WCAG contrast ratio against `other`, in `1..=21`.
    pub fn contrast(&self, other: &Color) -> f64 {
        let l1 = self.luminance();
        let l2 = other.luminance();
        (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
    }

    /// [`contrast`](Self::contrast) with any input [`parse_color`] accepts.
    pub fn contrast_with(&self, other: impl Into<ColorInput>) -> Result<f64, ParseError> {
        Ok(self.contrast(&parse_color(other)?))
    }

    #[inline]
    pub fn is_dark(&self) -> bool {
        self.brightness() < 128.0
    }

    #[inline]
    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

/// Exact comparison of channels and alpha.
impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b && self.a == other.a
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rgb_string())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s)
    }
}

impl TryFrom<ColorInput> for Color {
    type Error = ParseError;

    fn try_from(input: ColorInput) -> Result<Self, Self::Error> {
        parse_color(input)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgba(rgb.r, rgb.g, rgb.b, rgb.a)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        let rgb = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
        Self::from(rgb.with_alpha(hsl.a))
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        let rgb = hsv_to_rgb(hsv.h, hsv.s, hsv.v);
        Self::from(rgb.with_alpha(hsv.a))
    }
}

impl From<Oklab> for Color {
    fn from(lab: Oklab) -> Self {
        let rgb = oklab_to_rgb(lab.l, lab.a, lab.b);
        Self::from(rgb.with_alpha(lab.alpha))
    }
}

impl From<Oklch> for Color {
    fn from(lch: Oklch) -> Self {
        let rgb = oklch_to_rgb(lch.l, lch.c, lch.h);
        Self::from(rgb.with_alpha(lch.a))
    }
}

impl From<ColorObject> for Color {
    fn from(object: ColorObject) -> Self {
        match object {
            ColorObject::Rgb(rgb) => rgb.into(),
            ColorObject::Hsl(hsl) => hsl.into(),
            ColorObject::Hsv(hsv) => hsv.into(),
            ColorObject::Oklch(lch) => lch.into(),
            ColorObject::Oklab(lab) => lab.into(),
        }
    }
}

/// Serializes as the hex string.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

/// Accepts any string or object form the parser understands.
impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let input = ColorInput::deserialize(deserializer)?;
        parse_color(input).map_err(serde::de::Error::custom)
    }
}
