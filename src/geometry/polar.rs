use std::fmt;

use super::CartesianCoordinate;
use crate::math::tolerance::Tolerant;
use crate::math::{Angle, ZERO_TOLERANCE};

/// A point in the plane given by its distance from the origin and its azimuth.
#[derive(Debug, Clone, Copy)]
pub struct PolarCoordinate {
    radius: f64,
    azimuth: Angle,
    tolerance: f64,
}

impl PolarCoordinate {
    /// Creates a polar coordinate with the default tolerance.
    #[must_use]
    pub fn new(radius: f64, azimuth: Angle) -> Self {
        Self::with_tolerance(radius, azimuth, ZERO_TOLERANCE)
    }

    /// Creates a polar coordinate with an explicit tolerance.
    #[must_use]
    pub fn with_tolerance(radius: f64, azimuth: Angle, tolerance: f64) -> Self {
        Self {
            radius,
            azimuth,
            tolerance: tolerance.abs(),
        }
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn azimuth(&self) -> Angle {
        self.azimuth
    }

    #[must_use]
    pub fn to_cartesian(&self) -> CartesianCoordinate {
        CartesianCoordinate::with_tolerance(
            self.radius * self.azimuth.cos(),
            self.radius * self.azimuth.sin(),
            self.tolerance,
        )
    }
}

impl Tolerant for PolarCoordinate {
    fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl From<CartesianCoordinate> for PolarCoordinate {
    fn from(coordinate: CartesianCoordinate) -> Self {
        let tol = coordinate.tolerance();
        Self::with_tolerance(
            coordinate.x().hypot(coordinate.y()),
            Angle::from_components(coordinate.x(), coordinate.y(), tol),
            tol,
        )
    }
}

impl From<PolarCoordinate> for CartesianCoordinate {
    fn from(polar: PolarCoordinate) -> Self {
        polar.to_cartesian()
    }
}

/// Polar values compare through their Cartesian form, so every azimuth of a
/// zero radius is the same point.
impl PartialEq for PolarCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.to_cartesian() == other.to_cartesian()
    }
}

impl PartialEq<CartesianCoordinate> for PolarCoordinate {
    fn eq(&self, other: &CartesianCoordinate) -> bool {
        self.to_cartesian() == *other
    }
}

impl fmt::Display for PolarCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.radius, self.azimuth)
    }
}
