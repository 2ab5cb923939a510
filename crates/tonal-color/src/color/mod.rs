//! The color value type, its inputs and parsing
//!
//! [`Color`] is the entry point for everything in this crate: parse it from a
//! string or a structured value, read derived representations off it, and
//! derive new colors from it.
//!
//! # Accepted input
//!
//! | Form | Example |
//! |------|---------|
//! | Hex, 3/4/6/8 digits | `#1677ff`, `f00`, `#ff000080` |
//! | `rgb()` / `rgba()` | `rgb(22, 119, 255)`, `rgba(0,0,0,50%)` |
//! | `hsl()` / `hsla()` | `hsl(215, 100%, 54%)`, `hsl(215, 1, 0.54)` |
//! | `hsv()` / `hsb()` | `hsv(215, 91%, 100%)` |
//! | Named preset | `orange`, `grey` |
//! | Object | `{r,g,b}`, `{h,s,l}`, `{h,s,v}`, `{l,c,h}`, `{l,a,b}` |

mod error;
mod input;
pub mod named;
mod parse;
mod value;

pub use error::ParseError;
pub use input::{parse_color, ColorInput, ColorObject};
pub use value::{Color, DEFAULT_ADJUST_AMOUNT, DEFAULT_MIX_AMOUNT};
