//! Test fixtures and constants.

/// Published ant-design palettes, lightest first
pub mod ant_design {
    pub const BLUE: [&str; 10] = [
        "#e6f4ff", "#bae0ff", "#91caff", "#69b1ff", "#4096ff", "#1677ff", "#0958d9", "#003eb3",
        "#002c8c", "#001d66",
    ];

    pub const GREEN: [&str; 10] = [
        "#f6ffed", "#d9f7be", "#b7eb8f", "#95de64", "#73d13d", "#52c41a", "#389e0d", "#237804",
        "#135200", "#092b00",
    ];

    pub const BLUE_DARK: [&str; 10] = [
        "#111a2c", "#112545", "#15325b", "#15417e", "#1554ad", "#1668dc", "#3c89e8", "#65a9f3",
        "#8dc5f8", "#b7dcfa",
    ];

    pub const RED_DARK: [&str; 10] = [
        "#2a1215", "#431418", "#58181c", "#791a1f", "#a61d24", "#d32029", "#e84749", "#f37370",
        "#f89f9a", "#fac8c3",
    ];

    pub const SEEDS: [&str; 13] = [
        "red", "volcano", "orange", "gold", "yellow", "lime", "green", "cyan", "blue", "geekblue",
        "purple", "magenta", "grey",
    ];
}

/// Oklch ladder for the Tailwind blue seed `#3b82f6`
pub const TAILWIND_BLUE: [&str; 11] = [
    "#b2f9ff", "#a0e3ff", "#75c3ff", "#408aff", "#133b83", "#072257", "#011136", "#00071e",
    "#00010f", "#000004", "#000001",
];

/// A small custom catalog exercising every algorithm
pub const BRAND_CATALOG: &str = r##"
name: brand
description: Brand palettes
seeds:
  primary: "#1677ff"
  danger: "rgb(245, 34, 45)"
variants:
  light:
    algorithm: hsv-ladder
  dark:
    algorithm: hsv-ladder
    theme: dark
  ramp:
    algorithm: oklch-gradient
    steps: 6
    interpolation: linear
"##;
