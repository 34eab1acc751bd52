use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use approx::AbsDiffEq;

use super::{CartesianOffset, PolarCoordinate};
use crate::error::{ArithmeticError, Result};
use crate::math::tolerance::{self, Tolerant};
use crate::math::{Point2, Vector2, ZERO_TOLERANCE};

/// A point in the plane with an absolute equality tolerance.
#[derive(Debug, Clone, Copy)]
pub struct CartesianCoordinate {
    point: Point2,
    tolerance: f64,
}

impl CartesianCoordinate {
    /// Creates a coordinate with the default tolerance.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self::with_tolerance(x, y, ZERO_TOLERANCE)
    }

    /// Creates a coordinate with an explicit tolerance.
    #[must_use]
    pub fn with_tolerance(x: f64, y: f64, tolerance: f64) -> Self {
        Self {
            point: Point2::new(x, y),
            tolerance: tolerance.abs(),
        }
    }

    /// Wraps an existing point.
    #[must_use]
    pub fn from_point(point: Point2, tolerance: f64) -> Self {
        Self {
            point,
            tolerance: tolerance.abs(),
        }
    }

    /// The origin `(0, 0)`.
    #[must_use]
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.point.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.point.y
    }

    /// Returns the underlying point.
    #[must_use]
    pub fn point(&self) -> &Point2 {
        &self.point
    }

    /// Position vector from the origin.
    #[must_use]
    pub fn to_vector(&self) -> Vector2 {
        self.point.coords
    }

    /// `x1 * y2 - x2 * y1`.
    #[must_use]
    pub fn cross_product(&self, other: &Self) -> f64 {
        self.point.coords.perp(&other.point.coords)
    }

    /// `x1 * x2 + y1 * y2`.
    #[must_use]
    pub fn dot_product(&self, other: &Self) -> f64 {
        self.point.coords.dot(&other.point.coords)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        nalgebra::distance(&self.point, &other.point)
    }

    /// Directed offset from this coordinate to `other`.
    #[must_use]
    pub fn offset_to(&self, other: &Self) -> CartesianOffset {
        CartesianOffset::new(*self, *other)
    }

    /// Polar form around the origin.
    #[must_use]
    pub fn to_polar(&self) -> PolarCoordinate {
        PolarCoordinate::from(*self)
    }

    /// Divides both components by a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `divisor` is zero.
    pub fn divide(self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            return Err(ArithmeticError::DivideByZero {
                operand: "coordinate",
            }
            .into());
        }
        Ok(Self::from_point(self.point / divisor, self.tolerance))
    }

    fn combine(point: Point2, a: f64, b: f64) -> Self {
        Self::from_point(point, tolerance::combined_tolerance(a, b))
    }
}

impl Tolerant for CartesianCoordinate {
    fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Default for CartesianCoordinate {
    fn default() -> Self {
        Self::origin()
    }
}

impl PartialEq for CartesianCoordinate {
    fn eq(&self, other: &Self) -> bool {
        let tol = tolerance::combined_tolerance_of(self, other);
        tolerance::is_equal(self.x(), other.x(), tol) && tolerance::is_equal(self.y(), other.y(), tol)
    }
}

impl PartialEq<PolarCoordinate> for CartesianCoordinate {
    fn eq(&self, other: &PolarCoordinate) -> bool {
        *self == other.to_cartesian()
    }
}

impl AbsDiffEq for CartesianCoordinate {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        ZERO_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.point.abs_diff_eq(&other.point, epsilon)
    }
}

impl fmt::Display for CartesianCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

impl From<Point2> for CartesianCoordinate {
    fn from(point: Point2) -> Self {
        Self::from_point(point, ZERO_TOLERANCE)
    }
}

impl From<(f64, f64)> for CartesianCoordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for CartesianCoordinate {
    type Output = CartesianCoordinate;

    fn add(self, rhs: CartesianCoordinate) -> CartesianCoordinate {
        Self::combine(self.point + rhs.point.coords, self.tolerance, rhs.tolerance)
    }
}

impl Sub for CartesianCoordinate {
    type Output = CartesianCoordinate;

    fn sub(self, rhs: CartesianCoordinate) -> CartesianCoordinate {
        Self::combine(self.point - rhs.point.coords, self.tolerance, rhs.tolerance)
    }
}

impl Add<CartesianOffset> for CartesianCoordinate {
    type Output = CartesianCoordinate;

    fn add(self, rhs: CartesianOffset) -> CartesianCoordinate {
        Self::combine(self.point + rhs.to_vector(), self.tolerance, rhs.tolerance())
    }
}

impl Add<CartesianCoordinate> for CartesianOffset {
    type Output = CartesianCoordinate;

    fn add(self, rhs: CartesianCoordinate) -> CartesianCoordinate {
        rhs + self
    }
}

impl Sub<CartesianOffset> for CartesianCoordinate {
    type Output = CartesianCoordinate;

    fn sub(self, rhs: CartesianOffset) -> CartesianCoordinate {
        Self::combine(self.point - rhs.to_vector(), self.tolerance, rhs.tolerance())
    }
}

impl Mul<f64> for CartesianCoordinate {
    type Output = CartesianCoordinate;

    fn mul(self, rhs: f64) -> CartesianCoordinate {
        Self::from_point(self.point * rhs, self.tolerance)
    }
}

impl Mul<CartesianCoordinate> for f64 {
    type Output = CartesianCoordinate;

    fn mul(self, rhs: CartesianCoordinate) -> CartesianCoordinate {
        rhs * self
    }
}

impl Neg for CartesianCoordinate {
    type Output = CartesianCoordinate;

    fn neg(self) -> CartesianCoordinate {
        Self::from_point(-self.point, self.tolerance)
    }
}
