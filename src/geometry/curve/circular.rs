use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::geometry::CartesianCoordinate;
use crate::math::tolerance::Tolerant;
use crate::math::Angle;

use super::{Curve, CurveDomain};

/// A full circle in the plane.
///
/// `P(t) = center + radius * (cos t, sin t)` over `[0, 2π)`.
#[derive(Debug, Clone, Copy)]
pub struct CircularCurve {
    center: CartesianCoordinate,
    radius: f64,
}

impl CircularCurve {
    /// Creates a new circle.
    ///
    /// A zero radius is allowed and describes a single point.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidRadius`] if the radius is negative or
    /// not finite.
    pub fn new(center: CartesianCoordinate, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::InvalidRadius { radius }.into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> CartesianCoordinate {
        self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Point on the circle at the given azimuth.
    #[must_use]
    pub fn point_at(&self, azimuth: Angle) -> CartesianCoordinate {
        self.evaluate(azimuth.radians())
    }
}

impl Tolerant for CircularCurve {
    fn tolerance(&self) -> f64 {
        self.center.tolerance()
    }
}

impl Curve for CircularCurve {
    fn local_origin(&self) -> CartesianCoordinate {
        self.center
    }

    fn evaluate(&self, t: f64) -> CartesianCoordinate {
        CartesianCoordinate::with_tolerance(
            self.center.x() + self.radius * t.cos(),
            self.center.y() + self.radius * t.sin(),
            self.center.tolerance(),
        )
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
