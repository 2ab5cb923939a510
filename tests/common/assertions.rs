//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use tonal_color::{Color, Palette};

/// Assert every entry is a lowercase `#rrggbb` string
pub fn assert_hex_entries(palette: &Palette) {
    for entry in palette.iter() {
        assert_eq!(entry.len(), 7, "Expected #rrggbb, got {entry}");
        assert!(entry.starts_with('#'), "Expected leading #, got {entry}");
        assert!(
            entry[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            "Expected lowercase hex digits, got {entry}"
        );
    }
}

/// Assert palette entries match, with a readable diff on failure
pub fn assert_colors(palette: &Palette, expected: &[&str]) {
    let actual: Vec<&str> = palette.iter().collect();
    assert_eq!(actual, expected);
}

/// Assert palette lightness falls from first to last entry
pub fn assert_light_to_dark(palette: &Palette) {
    let first: Color = palette.colors[0].parse().expect("valid hex");
    let last: Color = palette.colors[palette.len() - 1].parse().expect("valid hex");
    assert!(
        first.luminance() > last.luminance(),
        "Expected {} to be lighter than {}",
        palette.colors[0],
        palette.colors[palette.len() - 1]
    );
}
