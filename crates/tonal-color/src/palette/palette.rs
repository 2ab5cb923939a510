//! Generated palette value.

use serde::{Deserialize, Serialize};

/// An ordered list of `#rrggbb` entries, optionally marking the primary.
///
/// Serializes as `{"colors": [...], "primary": "#..."}`; `primary` is left
/// out when there is none.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Palette {
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
}

impl Palette {
    /// A palette without a primary.
    pub fn new(colors: Vec<String>) -> Self {
        Self {
            colors,
            primary: None,
        }
    }

    /// A palette whose primary duplicates the entry at `index`.
    ///
    /// An out-of-range index leaves the primary unset.
    pub fn with_seed_index(colors: Vec<String>, index: Option<usize>) -> Self {
        let primary = index.and_then(|i| colors.get(i).cloned());
        Self { colors, primary }
    }

    /// Set the primary explicitly.
    #[inline]
    pub fn primary(mut self, hex: impl Into<String>) -> Self {
        self.primary = Some(hex.into());
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str)
    }
}
