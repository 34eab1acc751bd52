use std::cmp::Ordering;

use super::{MAX_ROUNDING_DIGITS, MIN_ROUNDING_DIGITS};

/// A value that carries an absolute equality tolerance.
///
/// When two tolerant values interact the stricter (smaller) tolerance wins.
pub trait Tolerant {
    /// Returns the absolute tolerance attached to this value.
    fn tolerance(&self) -> f64;
}

impl Tolerant for f64 {
    /// A bare scalar imposes no requirement of its own.
    fn tolerance(&self) -> f64 {
        f64::INFINITY
    }
}

/// Returns the effective tolerance of two interacting values.
#[must_use]
pub fn combined_tolerance(a: f64, b: f64) -> f64 {
    a.min(b)
}

/// Returns the effective tolerance of two interacting tolerant values.
#[must_use]
pub fn combined_tolerance_of<A, B>(a: &A, b: &B) -> f64
where
    A: Tolerant + ?Sized,
    B: Tolerant + ?Sized,
{
    combined_tolerance(a.tolerance(), b.tolerance())
}

/// Returns true if `value` is within `tolerance` of zero.
#[must_use]
pub fn is_zero(value: f64, tolerance: f64) -> bool {
    value.abs() <= tolerance
}

/// Returns true if `a` and `b` differ by no more than `tolerance`.
///
/// Identical infinities compare equal.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_equal(a: f64, b: f64, tolerance: f64) -> bool {
    a == b || (a - b).abs() <= tolerance
}

/// Three-way comparison: `Equal` within tolerance, otherwise the sign of `a - b`.
///
/// Returns `None` if either operand is NaN.
#[must_use]
pub fn compare(a: f64, b: f64, tolerance: f64) -> Option<Ordering> {
    if is_equal(a, b, tolerance) {
        return Some(Ordering::Equal);
    }
    a.partial_cmp(&b)
}

/// Replaces `value` with exactly `0.0` when it lies within `tolerance` of zero.
#[must_use]
pub fn snap_to_zero(value: f64, tolerance: f64) -> f64 {
    if is_zero(value, tolerance) {
        0.0
    } else {
        value
    }
}

/// Number of decimal places in the shortest round-trip form of `value`.
#[must_use]
pub fn decimal_places(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    let text = value.to_string();
    let places = text
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len());
    u32::try_from(places).unwrap_or(MAX_ROUNDING_DIGITS)
}

/// Rounding precision for `value`: its decimal places clamped to the usable range.
#[must_use]
pub fn rounding_digits(value: f64) -> u32 {
    decimal_places(value).clamp(MIN_ROUNDING_DIGITS, MAX_ROUNDING_DIGITS)
}

/// Rounds `value` to `digits` decimal places.
///
/// Values too large to scale without overflow are returned unchanged.
#[must_use]
pub fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10_f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}
