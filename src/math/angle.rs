use std::cmp::Ordering;
use std::f64::consts::{PI, TAU};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use approx::AbsDiffEq;

use super::tolerance::{self, Tolerant};
use super::ZERO_TOLERANCE;
use crate::error::{ArithmeticError, Result};

/// Converts degrees to radians.
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Converts radians to degrees.
#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Wraps `radians` into `(-π, π]`.
///
/// The turn count is computed from a quotient rounded to the input's own
/// decimal precision, so inputs that are whole turns reduce to exactly zero.
/// Large inputs leave a remainder outside one turn, which is folded back into
/// `[0, 2π)` before the reflection. Results within `tolerance` of zero snap to
/// `0.0`. Either infinity maps to `+∞`, which stands for an undefined direction.
#[must_use]
pub fn normalize(radians: f64, tolerance: f64) -> f64 {
    if radians.is_infinite() {
        return f64::INFINITY;
    }
    if radians.is_nan() {
        return radians;
    }

    let digits = tolerance::rounding_digits(radians);
    let turns = tolerance::round_to(radians / TAU, digits).floor();
    let remainder = radians - turns * TAU;
    let remainder = if remainder.is_finite() { remainder } else { radians };
    let reduced = remainder.rem_euclid(TAU);

    let wrapped = if reduced > PI { reduced - TAU } else { reduced };
    tolerance::snap_to_zero(wrapped, tolerance)
}

/// A planar angle held in canonical form.
///
/// [`radians`](Self::radians) is always the input wrapped into `(-π, π]`;
/// the unwrapped input is kept for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct Angle {
    radians: f64,
    radians_raw: f64,
    tolerance: f64,
}

impl Angle {
    /// Creates an angle from radians with the default tolerance.
    #[must_use]
    pub fn new(radians: f64) -> Self {
        Self::with_tolerance(radians, ZERO_TOLERANCE)
    }

    /// Creates an angle from radians with an explicit tolerance.
    #[must_use]
    pub fn with_tolerance(radians: f64, tolerance: f64) -> Self {
        let tolerance = tolerance.abs();
        Self {
            radians: normalize(radians, tolerance),
            radians_raw: radians,
            tolerance,
        }
    }

    /// Creates an angle from degrees with the default tolerance.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::new(degrees_to_radians(degrees))
    }

    /// The angle of the vector `(x, y)` measured from the positive x-axis.
    #[must_use]
    pub fn from_components(x: f64, y: f64, tolerance: f64) -> Self {
        Self::with_tolerance(y.atan2(x), tolerance)
    }

    /// A zero angle.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(0.0)
    }

    /// Normalized radians in `(-π, π]`.
    #[must_use]
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// The radians this angle was constructed from.
    #[must_use]
    pub fn radians_raw(&self) -> f64 {
        self.radians_raw
    }

    /// Normalized degrees in `(-180, 180]`.
    #[must_use]
    pub fn degrees(&self) -> f64 {
        radians_to_degrees(self.radians)
    }

    /// Degree equivalent of the unwrapped input.
    #[must_use]
    pub fn degrees_raw(&self) -> f64 {
        radians_to_degrees(self.radians_raw)
    }

    /// The same rotation measured clockwise.
    #[must_use]
    pub fn clockwise_radians(&self) -> f64 {
        -self.radians
    }

    #[must_use]
    pub fn sin(&self) -> f64 {
        self.radians.sin()
    }

    #[must_use]
    pub fn cos(&self) -> f64 {
        self.radians.cos()
    }

    #[must_use]
    pub fn tan(&self) -> f64 {
        self.radians.tan()
    }

    /// Returns true for the sentinel produced by an infinite input.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        self.radians.is_infinite()
    }

    /// Three-way comparison within the combined tolerance.
    ///
    /// Returns `None` if either angle is NaN.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        tolerance::compare(
            self.radians,
            other.radians,
            tolerance::combined_tolerance_of(self, other),
        )
    }

    /// Divides the angle by a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `divisor` is zero.
    pub fn divide(self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            return Err(ArithmeticError::DivideByZero { operand: "angle" }.into());
        }
        Ok(Self::with_tolerance(self.radians / divisor, self.tolerance))
    }

    fn combine(self, radians: f64, other_tolerance: f64) -> Self {
        Self::with_tolerance(
            radians,
            tolerance::combined_tolerance(self.tolerance, other_tolerance),
        )
    }
}

impl Tolerant for Angle {
    fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        tolerance::is_equal(
            self.radians,
            other.radians,
            tolerance::combined_tolerance_of(self, other),
        )
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad", self.radians)
    }
}

impl AbsDiffEq for Angle {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        ZERO_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        tolerance::is_equal(self.radians, other.radians, epsilon)
    }
}

impl From<Angle> for f64 {
    fn from(angle: Angle) -> f64 {
        angle.radians
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        self.combine(self.radians + rhs.radians, rhs.tolerance)
    }
}

impl Add<f64> for Angle {
    type Output = Angle;

    fn add(self, rhs: f64) -> Angle {
        self.combine(self.radians + rhs, rhs.tolerance())
    }
}

impl Add<Angle> for f64 {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        rhs + self
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        self.combine(self.radians - rhs.radians, rhs.tolerance)
    }
}

impl Sub<f64> for Angle {
    type Output = Angle;

    fn sub(self, rhs: f64) -> Angle {
        self.combine(self.radians - rhs, rhs.tolerance())
    }
}

impl Sub<Angle> for f64 {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::with_tolerance(self - rhs.radians, rhs.tolerance)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f64) -> Angle {
        self.combine(self.radians * rhs, rhs.tolerance())
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;

    fn mul(self, rhs: Angle) -> Angle {
        rhs * self
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::with_tolerance(-self.radians, self.tolerance)
    }
}
