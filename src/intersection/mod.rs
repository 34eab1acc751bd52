pub mod circular_circular;
pub mod linear_circular;
pub mod linear_linear;

pub use circular_circular::radical_line_length;

use crate::error::Result;
use crate::geometry::{CartesianCoordinate, CircularCurve, LinearCurve};
use crate::math::tolerance::{self, Tolerant};

/// Classification and intersection points of two curves.
///
/// Each supported pair of curve kinds implements this trait on
/// [`Intersection`], so the algorithm is picked from the static types of the
/// two curves:
///
/// | first | second | module |
/// |---|---|---|
/// | [`LinearCurve`] | [`LinearCurve`] | [`linear_linear`] |
/// | [`LinearCurve`] | [`CircularCurve`] | [`linear_circular`] |
/// | [`CircularCurve`] | [`LinearCurve`] | [`linear_circular`] |
/// | [`CircularCurve`] | [`CircularCurve`] | [`circular_circular`] |
///
/// Classification never fails. Only `intersection_coordinates` reports
/// errors, and only for configurations where the coordinates are undefined.
pub trait CurveIntersection {
    /// Returns true if the curves touch without crossing.
    fn are_tangent(&self) -> bool;

    /// Returns true if the curves share at least one point.
    fn are_intersecting(&self) -> bool;

    /// Returns the zero, one or two points the curves share.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is degenerate and the points are
    /// undefined.
    fn intersection_coordinates(&self) -> Result<Vec<CartesianCoordinate>>;
}

/// A pair of curves to intersect.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a, A, B> {
    first: &'a A,
    second: &'a B,
}

impl<'a, A, B> Intersection<'a, A, B> {
    #[must_use]
    pub fn new(first: &'a A, second: &'a B) -> Self {
        Self { first, second }
    }

    #[must_use]
    pub fn first(&self) -> &'a A {
        self.first
    }

    #[must_use]
    pub fn second(&self) -> &'a B {
        self.second
    }

    /// The same pair in the opposite order.
    #[must_use]
    pub fn swapped(&self) -> Intersection<'a, B, A> {
        Intersection::new(self.second, self.first)
    }
}

impl<A: Tolerant, B: Tolerant> Tolerant for Intersection<'_, A, B> {
    fn tolerance(&self) -> f64 {
        tolerance::combined_tolerance_of(self.first, self.second)
    }
}

/// Builds an [`Intersection`] from a curve and a curve of a supported kind.
pub trait Intersect<Other>: Sized {
    fn intersection_with<'a>(&'a self, other: &'a Other) -> Intersection<'a, Self, Other>;
}

impl Intersect<LinearCurve> for LinearCurve {
    fn intersection_with<'a>(&'a self, other: &'a LinearCurve) -> Intersection<'a, Self, LinearCurve> {
        Intersection::new(self, other)
    }
}

impl Intersect<CircularCurve> for LinearCurve {
    fn intersection_with<'a>(
        &'a self,
        other: &'a CircularCurve,
    ) -> Intersection<'a, Self, CircularCurve> {
        Intersection::new(self, other)
    }
}

impl Intersect<LinearCurve> for CircularCurve {
    fn intersection_with<'a>(&'a self, other: &'a LinearCurve) -> Intersection<'a, Self, LinearCurve> {
        Intersection::new(self, other)
    }
}

impl Intersect<CircularCurve> for CircularCurve {
    fn intersection_with<'a>(
        &'a self,
        other: &'a CircularCurve,
    ) -> Intersection<'a, Self, CircularCurve> {
        Intersection::new(self, other)
    }
}
