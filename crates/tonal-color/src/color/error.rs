//! Error type for color parsing
//!
//! Parsing is the only fallible operation in this crate. Numeric values that
//! are merely out of range are clamped, so every variant here describes input
//! whose *shape* is not recognized.

use thiserror::Error;

/// Error returned when a color input matches none of the accepted forms.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Empty or whitespace-only string
    #[error("empty color string")]
    Empty,

    /// Hex digits with a length other than 3, 4, 6 or 8
    #[error("invalid hex color {0:?}: expected 3, 4, 6 or 8 hex digits")]
    HexLength(String),

    /// Functional notation with fewer than three numeric components
    #[error("{function}() needs at least 3 components, found {found}")]
    TooFewComponents {
        /// Function name as written, e.g. `rgba`
        function: String,
        /// Number of numeric tokens found
        found: usize,
    },

    /// A token that looked numeric but did not parse as a number
    #[error("invalid number {0:?}")]
    Number(String),

    /// Object field present but not a number
    #[error("field `{0}` must be a number")]
    NonNumericField(String),

    /// Object without a recognized set of fields
    #[error("unsupported color object with fields [{0}]")]
    UnknownShape(String),

    /// String that is not hex, functional notation or a named color
    #[error("cannot parse color {0:?}")]
    Unrecognized(String),

    /// A value that is neither a string nor an object
    #[error("unsupported color input: {0}")]
    Unsupported(String),
}
