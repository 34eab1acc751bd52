use std::cmp::Ordering;

use tracing::{debug, trace};

use super::{CurveIntersection, Intersection};
use crate::error::{GeometryError, Result};
use crate::geometry::{CartesianCoordinate, CircularCurve, Transformations};
use crate::math::tolerance::{self, Tolerant};

/// Length of the chord shared by two circles whose centers are `separation` apart.
///
/// Computed as `sqrt(4·(sep·r1)² - factor²) / sep` with
/// `factor = sep² - r2² + r1²`. Externally tangent circles give exactly zero.
///
/// # Errors
///
/// * [`GeometryError::ConcentricCircles`] if `separation` is zero.
/// * [`GeometryError::DisjointCircles`] if `separation` exceeds `r1 + r2`.
/// * [`GeometryError::NestedCircles`] if `separation` is below `|r1 - r2|`.
pub fn radical_line_length(separation: f64, r1: f64, r2: f64, tolerance: f64) -> Result<f64> {
    if tolerance::is_zero(separation, tolerance) {
        debug!(r1, r2, "concentric circles have no radical line");
        return Err(GeometryError::ConcentricCircles { r1, r2 }.into());
    }
    let radii = r1 + r2;
    if tolerance::compare(separation, radii, tolerance) == Some(Ordering::Greater) {
        debug!(separation, r1, r2, "disjoint circles have no radical line");
        return Err(GeometryError::DisjointCircles { separation, r1, r2 }.into());
    }
    if tolerance::is_equal(separation, radii, tolerance) {
        return Ok(0.0);
    }

    if tolerance::compare(separation, (r1 - r2).abs(), tolerance) == Some(Ordering::Less) {
        debug!(separation, r1, r2, "nested circles have no radical line");
        return Err(GeometryError::NestedCircles {
            separation,
            inner: r1.min(r2),
            outer: r1.max(r2),
        }
        .into());
    }

    let factor = separation * separation - r2 * r2 + r1 * r1;
    let scaled = separation * r1;
    // Near either tangency the radicand can round slightly below zero.
    let radicand = (4.0 * scaled * scaled - factor * factor).max(0.0);
    Ok(radicand.sqrt() / separation)
}

impl Intersection<'_, CircularCurve, CircularCurve> {
    /// Distance between the two centers.
    #[must_use]
    pub fn center_separation(&self) -> f64 {
        self.first().center().distance_to(&self.second().center())
    }

    /// Length of the chord through both intersection points.
    ///
    /// # Errors
    ///
    /// See [`radical_line_length`].
    pub fn radical_line_length(&self) -> Result<f64> {
        radical_line_length(
            self.center_separation(),
            self.first().radius(),
            self.second().radius(),
            self.tolerance(),
        )
    }

    fn radii_sum(&self) -> f64 {
        self.first().radius() + self.second().radius()
    }
}

impl CurveIntersection for Intersection<'_, CircularCurve, CircularCurve> {
    /// External tangency only: the separation equals the sum of the radii.
    ///
    /// Internally tangent circles (`separation == |r1 - r2|`) are reported as
    /// intersecting but not tangent.
    fn are_tangent(&self) -> bool {
        tolerance::is_equal(self.center_separation(), self.radii_sum(), self.tolerance())
    }

    fn are_intersecting(&self) -> bool {
        matches!(
            tolerance::compare(self.radii_sum(), self.center_separation(), self.tolerance()),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::ConcentricCircles`] for circles sharing a
    /// center and [`GeometryError::NestedCircles`] when one circle lies
    /// inside the other.
    fn intersection_coordinates(&self) -> Result<Vec<CartesianCoordinate>> {
        if !self.are_intersecting() {
            return Ok(Vec::new());
        }

        let tol = self.tolerance();
        let (r1, r2) = (self.first().radius(), self.second().radius());
        let separation = self.center_separation();
        if tolerance::is_zero(separation, tol) {
            debug!(r1, r2, "concentric circles have no intersection points");
            return Err(GeometryError::ConcentricCircles { r1, r2 }.into());
        }

        let frame = Transformations::new(self.first().center(), self.second().center())?;
        let factor = separation * separation - r2 * r2 + r1 * r1;
        let x = factor / (2.0 * separation);
        trace!(separation, factor, x, "circle/circle radical line");

        let to_global = |y: f64| {
            let global = frame.to_global(&CartesianCoordinate::new(x, y));
            CartesianCoordinate::with_tolerance(global.x(), global.y(), tol)
        };

        if self.are_tangent() {
            return Ok(vec![to_global(0.0)]);
        }
        let half_chord = self.radical_line_length()? / 2.0;
        Ok(vec![to_global(half_chord), to_global(-half_chord)])
    }
}
