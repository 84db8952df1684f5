//! Numeric helpers shared by the scoring functions.
//!
//! Rounding follows the dashboard's charting code: halves round towards
//! positive infinity, so `-2.5` becomes `-2` and `2.5` becomes `3`. One-decimal
//! values are rounded the way the dashboard formats them for display, on the
//! exact stored value.

/// Rounds to the nearest integer, halves towards positive infinity.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounds to one decimal place using the exact binary value.
///
/// A stored `4.35` is really `4.3499999...` and rounds down. Only values
/// that sit exactly on a tie (fractional part `.25` or `.75`) round away
/// from zero.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn round_to_tenth(value: f64) -> f64 {
    let fraction = value.fract().abs();
    if fraction == 0.25 || fraction == 0.75 {
        return (value.abs() * 10.0).ceil().copysign(value) / 10.0;
    }

    format!("{value:.1}").parse().unwrap_or(value)
}

/// Absolute value, with `NaN` read as 0.
#[must_use]
pub fn magnitude(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.abs() }
}

/// Fractional part of a non-negative value.
#[must_use]
pub fn fract_positive(value: f64) -> f64 {
    value % 1.0
}
