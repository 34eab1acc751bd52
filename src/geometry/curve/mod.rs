mod circular;
mod linear;

pub use circular::CircularCurve;
pub use linear::LinearCurve;

use super::CartesianCoordinate;
use crate::math::Tolerant;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns true if `t` lies inside the domain.
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.t_min && t <= self.t_max
    }
}

/// Trait for parametric curves in the plane.
pub trait Curve: Tolerant {
    /// The reference point the curve is positioned by.
    fn local_origin(&self) -> CartesianCoordinate;

    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> CartesianCoordinate;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}
