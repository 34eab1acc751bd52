use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::CartesianCoordinate;
use crate::error::{ArithmeticError, GeometryError, Result};
use crate::math::tolerance::{self, Tolerant};
use crate::math::{Angle, Vector2};

/// Directed difference between two coordinates, from `i` to `j`.
#[derive(Debug, Clone, Copy)]
pub struct CartesianOffset {
    i: CartesianCoordinate,
    j: CartesianCoordinate,
}

impl CartesianOffset {
    /// Creates the offset from `i` to `j`.
    #[must_use]
    pub fn new(i: CartesianCoordinate, j: CartesianCoordinate) -> Self {
        Self { i, j }
    }

    /// Creates an offset anchored at the origin with the given components.
    #[must_use]
    pub fn from_delta(x: f64, y: f64) -> Self {
        Self::new(CartesianCoordinate::origin(), CartesianCoordinate::new(x, y))
    }

    fn from_vector(delta: Vector2, tolerance: f64) -> Self {
        Self::new(
            CartesianCoordinate::with_tolerance(0.0, 0.0, tolerance),
            CartesianCoordinate::with_tolerance(delta.x, delta.y, tolerance),
        )
    }

    /// Start coordinate.
    #[must_use]
    pub fn i(&self) -> CartesianCoordinate {
        self.i
    }

    /// End coordinate.
    #[must_use]
    pub fn j(&self) -> CartesianCoordinate {
        self.j
    }

    /// `j.x - i.x`.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.j.x() - self.i.x()
    }

    /// `j.y - i.y`.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.j.y() - self.i.y()
    }

    #[must_use]
    pub fn to_vector(&self) -> Vector2 {
        Vector2::new(self.x(), self.y())
    }

    /// The offset as a coordinate relative to the origin.
    #[must_use]
    pub fn to_coordinate(&self) -> CartesianCoordinate {
        CartesianCoordinate::with_tolerance(self.x(), self.y(), self.tolerance())
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.to_vector().norm()
    }

    /// Returns true if the length is within tolerance of zero.
    #[must_use]
    pub fn is_zero_length(&self) -> bool {
        tolerance::is_zero(self.length(), self.tolerance())
    }

    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.to_vector().dot(&other.to_vector())
    }

    #[must_use]
    pub fn cross(&self, other: &Self) -> f64 {
        self.to_vector().perp(&other.to_vector())
    }

    /// Direction of the offset measured from the positive x-axis.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLengthOffset`] if the offset has no length.
    pub fn direction(&self) -> Result<Angle> {
        if self.is_zero_length() {
            return Err(GeometryError::ZeroLengthOffset.into());
        }
        Ok(Angle::from_components(self.x(), self.y(), self.tolerance()))
    }

    /// Divides both components by a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `divisor` is zero.
    pub fn divide(self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            return Err(ArithmeticError::DivideByZero { operand: "offset" }.into());
        }
        Ok(Self::from_vector(self.to_vector() / divisor, self.tolerance()))
    }
}

impl Tolerant for CartesianOffset {
    fn tolerance(&self) -> f64 {
        tolerance::combined_tolerance_of(&self.i, &self.j)
    }
}

impl PartialEq for CartesianOffset {
    fn eq(&self, other: &Self) -> bool {
        let tol = tolerance::combined_tolerance_of(self, other);
        tolerance::is_equal(self.x(), other.x(), tol) && tolerance::is_equal(self.y(), other.y(), tol)
    }
}

impl fmt::Display for CartesianOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.i, self.j)
    }
}

impl Add for CartesianOffset {
    type Output = CartesianOffset;

    fn add(self, rhs: CartesianOffset) -> CartesianOffset {
        Self::from_vector(
            self.to_vector() + rhs.to_vector(),
            tolerance::combined_tolerance_of(&self, &rhs),
        )
    }
}

impl Sub for CartesianOffset {
    type Output = CartesianOffset;

    fn sub(self, rhs: CartesianOffset) -> CartesianOffset {
        Self::from_vector(
            self.to_vector() - rhs.to_vector(),
            tolerance::combined_tolerance_of(&self, &rhs),
        )
    }
}

impl Mul<f64> for CartesianOffset {
    type Output = CartesianOffset;

    fn mul(self, rhs: f64) -> CartesianOffset {
        Self::from_vector(self.to_vector() * rhs, self.tolerance())
    }
}

impl Mul<CartesianOffset> for f64 {
    type Output = CartesianOffset;

    fn mul(self, rhs: CartesianOffset) -> CartesianOffset {
        rhs * self
    }
}

impl Neg for CartesianOffset {
    type Output = CartesianOffset;

    fn neg(self) -> CartesianOffset {
        Self::new(self.j, self.i)
    }
}
