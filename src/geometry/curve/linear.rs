use crate::error::{GeometryError, Result};
use crate::geometry::{CartesianCoordinate, CartesianOffset};
use crate::math::tolerance::{self, Tolerant};

use super::{Curve, CurveDomain};

/// An infinite line through two control points.
///
/// The parametric form is `P(t) = i + t * (j - i)`, so `t = 0` and `t = 1`
/// land on the control points.
#[derive(Debug, Clone, Copy)]
pub struct LinearCurve {
    i: CartesianCoordinate,
    j: CartesianCoordinate,
}

impl LinearCurve {
    /// Creates a line through two control points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CoincidentControlPoints`] if the points
    /// coincide within their combined tolerance.
    pub fn new(i: CartesianCoordinate, j: CartesianCoordinate) -> Result<Self> {
        if i.offset_to(&j).is_zero_length() {
            return Err(GeometryError::CoincidentControlPoints { x: i.x(), y: i.y() }.into());
        }
        Ok(Self { i, j })
    }

    /// First control point.
    #[must_use]
    pub fn i(&self) -> CartesianCoordinate {
        self.i
    }

    /// Second control point.
    #[must_use]
    pub fn j(&self) -> CartesianCoordinate {
        self.j
    }

    /// Offset from the first control point to the second.
    #[must_use]
    pub fn offset(&self) -> CartesianOffset {
        self.i.offset_to(&self.j)
    }

    /// Returns true if the line runs parallel to the y-axis.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        tolerance::is_zero(self.offset().x(), self.tolerance())
    }

    /// Returns true if the line runs parallel to the x-axis.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        tolerance::is_zero(self.offset().y(), self.tolerance())
    }

    /// `dy / dx`; infinite for vertical lines.
    #[must_use]
    pub fn slope(&self) -> f64 {
        if self.is_vertical() {
            return f64::INFINITY;
        }
        let offset = self.offset();
        offset.y() / offset.x()
    }

    /// The `x` where the line crosses `y = 0`, or `None` for horizontal lines.
    #[must_use]
    pub fn intercept_x(&self) -> Option<f64> {
        if self.is_horizontal() {
            return None;
        }
        if self.is_vertical() {
            return Some(self.i.x());
        }
        Some(self.i.x() - self.i.y() / self.slope())
    }

    /// The `y` where the line crosses `x = 0`, or `None` for vertical lines.
    #[must_use]
    pub fn intercept_y(&self) -> Option<f64> {
        if self.is_vertical() {
            return None;
        }
        Some(self.i.y() - self.slope() * self.i.x())
    }

    /// Returns true if both lines have the same slope within tolerance.
    ///
    /// Two vertical lines are parallel; a vertical and a non-vertical line are not.
    #[must_use]
    pub fn is_parallel(&self, other: &Self) -> bool {
        match (self.is_vertical(), other.is_vertical()) {
            (true, true) => true,
            (false, false) => tolerance::is_equal(
                self.slope(),
                other.slope(),
                tolerance::combined_tolerance_of(self, other),
            ),
            _ => false,
        }
    }
}

impl Tolerant for LinearCurve {
    fn tolerance(&self) -> f64 {
        tolerance::combined_tolerance_of(&self.i, &self.j)
    }
}

impl Curve for LinearCurve {
    fn local_origin(&self) -> CartesianCoordinate {
        self.i
    }

    fn evaluate(&self, t: f64) -> CartesianCoordinate {
        self.i + self.offset() * t
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    fn is_closed(&self) -> bool {
        false
    }
}
