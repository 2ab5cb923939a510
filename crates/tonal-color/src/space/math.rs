//! Scalar helpers shared by the color space conversions and the palette
//! generators.
//!
//! All arithmetic is done in `f64`. Several palettes produced by this crate
//! must match external reference palettes byte for byte, so the helpers keep
//! the exact operation order of the reference formulas.

/// Clamp `value` into `min..=max`.
///
/// Unlike [`f64::clamp`], this never panics when `min > max`.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(value))
}

/// Round `value` to the given number of decimal places.
///
/// ```
/// use tonal_color::space::round_to;
///
/// assert_eq!(round_to(0.456, 2), 0.46);
/// ```
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round to the nearest integer and clamp into `0..=255`.
#[inline]
pub fn limit_range(value: f64) -> f64 {
    clamp(value.round(), 0.0, 255.0)
}

/// Round and clamp a channel value, then narrow it to a byte.
#[inline]
pub fn to_channel(value: f64) -> u8 {
    limit_range(value) as u8
}

/// Clamp an alpha value into `0..=1`.
#[inline]
pub fn limit_alpha(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Normalize an angle in degrees into `0..360`.
#[inline]
pub fn normalize_hue(angle: f64) -> f64 {
    ((angle % 360.0) + 360.0) % 360.0
}

/// Linear interpolation between `start` and `end`.
#[inline]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Cubic ease-in-out curve on `0..=1`.
///
/// Symmetric around `t = 0.5`, with zero slope at both ends.
#[inline]
pub fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
