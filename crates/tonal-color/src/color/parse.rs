//! String parsing: hex, functional notation and named presets.
//!
//! Input is trimmed and lowercased, then tried in order as
//!
//! 1. hex with or without `#` (3, 4, 6 or 8 digits)
//! 2. `rgb(...)` / `rgba(...)`
//! 3. `hsl(...)` / `hsla(...)`
//! 4. `hsv(...)` / `hsb(...)`
//! 5. a named preset
//!
//! Functional forms are lenient: anything that looks like a number inside the
//! parentheses is a component, separators are ignored. Components beyond the
//! fourth are ignored too.
//!
//! Percentages follow CSS rather than the older JavaScript parser these
//! palettes come from: a `%` channel in `rgb()` is scaled by 255/100, so
//! `rgb(100%, 0%, 50%)` is `#ff0080` and not `rgb(100, 0, 50)`, and a `%`
//! alpha is divided by 100.

use std::sync::LazyLock;

use regex::Regex;

use super::error::ParseError;
use super::named;
use super::value::Color;
use crate::space::{clamp, limit_alpha, Hsl, Hsv};

static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?[0-9a-f]{3,8}$").expect("Failed to compile hex regex"));

static NUMBER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[+-]?(?:\d+(?:\.\d*)?|\.\d+)%?").expect("Failed to compile number regex")
});

/// One numeric component of a functional color string.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Component {
    value: f64,
    percent: bool,
}

impl Component {
    /// Percent components become fractions, bare ones are taken as is.
    fn fraction(self) -> f64 {
        if self.percent {
            self.value / 100.0
        } else {
            self.value
        }
    }
}

/// Parse a color string.
pub(crate) fn parse_str(input: &str) -> Result<Color, ParseError> {
    let s = input.trim().to_lowercase();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    if HEX_PATTERN.is_match(&s) {
        return parse_hex(&s);
    }
    if s.starts_with("rgb") {
        return parse_rgb(&s);
    }
    if s.starts_with("hsl") {
        return parse_hsl(&s);
    }
    if s.starts_with("hsv") || s.starts_with("hsb") {
        return parse_hsv(&s);
    }
    if let Some(hex) = named::lookup(&s) {
        return parse_hex(hex);
    }

    Err(ParseError::Unrecognized(input.trim().to_owned()))
}

fn parse_hex(s: &str) -> Result<Color, ParseError> {
    let digits = s.strip_prefix('#').unwrap_or(s);

    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_owned(),
        _ => return Err(ParseError::HexLength(s.to_owned())),
    };

    let byte = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map_err(|_| ParseError::Unrecognized(s.to_owned()))
    };

    let alpha = if expanded.len() == 8 {
        byte(6)? as f64 / 255.0
    } else {
        1.0
    };

    Ok(Color::from_rgba(
        byte(0)? as f64,
        byte(2)? as f64,
        byte(4)? as f64,
        alpha,
    ))
}

/// Function name and numeric components of `name(a, b, c[, d])`.
///
/// Requires at least three components.
fn components(s: &str) -> Result<(&str, Vec<Component>), ParseError> {
    let (name, args) = match s.split_once('(') {
        Some((name, rest)) => (name.trim(), rest.split(')').next().unwrap_or(rest)),
        None => (s, s),
    };

    let components = NUMBER_TOKEN
        .find_iter(args)
        .map(|m| {
            let token = m.as_str();
            let digits = token.trim_end_matches('%');
            digits
                .parse::<f64>()
                .map(|value| Component {
                    value,
                    percent: digits.len() != token.len(),
                })
                .map_err(|_| ParseError::Number(token.to_owned()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if components.len() < 3 {
        return Err(ParseError::TooFewComponents {
            function: name.to_owned(),
            found: components.len(),
        });
    }

    Ok((name, components))
}

fn alpha(components: &[Component]) -> f64 {
    components
        .get(3)
        .map_or(1.0, |c| limit_alpha(c.fraction()))
}

fn parse_rgb(s: &str) -> Result<Color, ParseError> {
    let (_, c) = components(s)?;
    let channel = |c: Component| {
        if c.percent {
            c.value * 255.0 / 100.0
        } else {
            c.value
        }
    };

    Ok(Color::from_rgba(
        channel(c[0]),
        channel(c[1]),
        channel(c[2]),
        alpha(&c),
    ))
}

fn parse_hsl(s: &str) -> Result<Color, ParseError> {
    let (_, c) = components(s)?;
    Ok(Color::from(Hsl {
        h: c[0].value,
        s: clamp(c[1].fraction(), 0.0, 1.0),
        l: clamp(c[2].fraction(), 0.0, 1.0),
        a: alpha(&c),
    }))
}

fn parse_hsv(s: &str) -> Result<Color, ParseError> {
    let (_, c) = components(s)?;
    Ok(Color::from(Hsv {
        h: c[0].value,
        s: clamp(c[1].fraction(), 0.0, 1.0),
        v: clamp(c[2].fraction(), 0.0, 1.0),
        a: alpha(&c),
    }))
}
