//! Accepted color inputs and their discrimination.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::error::ParseError;
use super::parse::parse_str;
use super::value::Color;
use crate::space::{Hsl, Hsv, Oklab, Oklch, Rgb};

/// Anything [`parse_color`] accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// An existing color, taken as is
    Color(Color),
    /// Hex, functional notation or a named preset
    Text(String),
    /// A structured value in one of the supported spaces
    Object(ColorObject),
}

/// A structured color in one of the supported spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorObject {
    Rgb(Rgb),
    Hsl(Hsl),
    Hsv(Hsv),
    Oklch(Oklch),
    Oklab(Oklab),
}

impl ColorObject {
    /// Pick the color space from which fields are present.
    ///
    /// Checked in order: `r,g,b` (RGB), `h,s,l` (HSL), `h,s,v` (HSV),
    /// `l,c,h` (Oklch), `l,a,b` (Oklab). The first complete set wins, so
    /// `{h, s, l, v}` is HSL and `{l, c, h, a, b}` is Oklch. Extra fields
    /// are ignored.
    ///
    /// Alpha is `a` everywhere except Oklab, which uses `alpha`. A missing or
    /// `null` alpha means opaque.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ParseError> {
        let has = |keys: &[&str]| keys.iter().all(|k| map.contains_key(*k));

        if has(&["r", "g", "b"]) {
            Ok(Self::Rgb(Rgb {
                r: number(map, "r")?,
                g: number(map, "g")?,
                b: number(map, "b")?,
                a: alpha(map, "a")?,
            }))
        } else if has(&["h", "s", "l"]) {
            Ok(Self::Hsl(Hsl {
                h: number(map, "h")?,
                s: number(map, "s")?,
                l: number(map, "l")?,
                a: alpha(map, "a")?,
            }))
        } else if has(&["h", "s", "v"]) {
            Ok(Self::Hsv(Hsv {
                h: number(map, "h")?,
                s: number(map, "s")?,
                v: number(map, "v")?,
                a: alpha(map, "a")?,
            }))
        } else if has(&["l", "c", "h"]) {
            Ok(Self::Oklch(Oklch {
                l: number(map, "l")?,
                c: number(map, "c")?,
                h: number(map, "h")?,
                a: alpha(map, "a")?,
            }))
        } else if has(&["l", "a", "b"]) {
            Ok(Self::Oklab(Oklab {
                l: number(map, "l")?,
                a: number(map, "a")?,
                b: number(map, "b")?,
                alpha: alpha(map, "alpha")?,
            }))
        } else {
            let fields: Vec<&str> = map.keys().map(String::as_str).collect();
            Err(ParseError::UnknownShape(fields.join(", ")))
        }
    }
}

fn number(map: &Map<String, Value>, key: &str) -> Result<f64, ParseError> {
    map.get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| ParseError::NonNumericField(key.to_owned()))
}

fn alpha(map: &Map<String, Value>, key: &str) -> Result<f64, ParseError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(1.0),
        Some(_) => number(map, key),
    }
}

impl TryFrom<Value> for ColorInput {
    type Error = ParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Self::Text(s)),
            Value::Object(map) => ColorObject::from_map(&map).map(Self::Object),
            other => Err(ParseError::Unsupported(other.to_string())),
        }
    }
}

/// Accepts a string or an object from any self-describing format.
impl<'de> Deserialize<'de> for ColorInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl From<Color> for ColorInput {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<&Color> for ColorInput {
    fn from(color: &Color) -> Self {
        Self::Color(color.clone())
    }
}

impl From<&str> for ColorInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for ColorInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<ColorObject> for ColorInput {
    fn from(object: ColorObject) -> Self {
        Self::Object(object)
    }
}

macro_rules! object_input {
    ($($space:ident),*) => {
        $(
            impl From<$space> for ColorInput {
                fn from(value: $space) -> Self {
                    Self::Object(ColorObject::$space(value))
                }
            }
        )*
    };
}

object_input!(Rgb, Hsl, Hsv, Oklch, Oklab);

/// Build a [`Color`] from any accepted input.
///
/// Strings go through the same parser as `"...".parse::<Color>()`. Objects
/// and existing colors always succeed, with out-of-range values clamped.
///
/// # Example
///
/// ```
/// use tonal_color::{parse_color, space::Rgb};
///
/// let a = parse_color("rgb(255, 0, 0)").unwrap();
/// let b = parse_color(Rgb::new(300.0, -5.0, 0.0)).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse_color(input: impl Into<ColorInput>) -> Result<Color, ParseError> {
    match input.into() {
        ColorInput::Color(color) => Ok(color),
        ColorInput::Text(s) => parse_str(&s),
        ColorInput::Object(object) => Ok(object.into()),
    }
}
