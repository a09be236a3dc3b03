//! Floating point helpers shared by all shapes

/// Absolute tolerance used when comparing coordinates and distances
pub const EPSILON: f64 = 1e-6;

/// Checks if two values differ by less than [`EPSILON`]
///
/// # Examples
///
/// ```rust
/// use geoshape_core::util::num::equals_eps;
///
/// assert!(equals_eps(1.0, 1.0 + 1e-12));
/// assert!(!equals_eps(1.0, 1.001));
/// ```
pub fn equals_eps(a: f64, b: f64) -> bool {
    equals_eps_with(a, b, EPSILON)
}

/// Checks if two values differ by less than `eps`
pub fn equals_eps_with(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

/// Rounds `value` to the given number of decimal places
pub fn round(value: f64, decimal_places: i32) -> f64 {
    let factor = 10f64.powi(decimal_places);
    (value * factor).round() / factor
}

/// Rounds to 6 decimal places (about 11cm at the equator)
pub fn round6(value: f64) -> f64 {
    round(value, 6)
}

/// Rounds to 2 decimal places
pub fn round2(value: f64) -> f64 {
    round(value, 2)
}

/// Maps `value` onto the [`EPSILON`] grid so it can be hashed consistently
/// with [`equals_eps`] for all values that do not straddle a grid boundary.
/// Infinite values saturate.
pub fn quantize(value: f64) -> i64 {
    if value.is_nan() {
        return i64::MIN;
    }
    // `as` saturates for values outside of the i64 range
    (value / EPSILON).round() as i64
}
