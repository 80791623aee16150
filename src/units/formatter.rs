//! Rounding of results to the configured decimal precision.

/// Round a value to `precision` decimal digits, half away from zero.
/// Applied to every returned result, including comparison differences.
pub fn apply_precision(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (value * scale).round() / scale
}
