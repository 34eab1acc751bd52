use tracing::trace;

use super::{CurveIntersection, Intersection};
use crate::error::Result;
use crate::geometry::{CartesianCoordinate, LinearCurve};
use crate::math::tolerance::{self, Tolerant};

impl CurveIntersection for Intersection<'_, LinearCurve, LinearCurve> {
    /// Coincident lines: parallel and crossing the same axis at the same place.
    fn are_tangent(&self) -> bool {
        let (a, b) = (self.first(), self.second());
        if !a.is_parallel(b) {
            return false;
        }
        let tol = self.tolerance();
        let shared = match (a.intercept_y(), b.intercept_y()) {
            (Some(ya), Some(yb)) => Some((ya, yb)),
            _ => a.intercept_x().zip(b.intercept_x()),
        };
        shared.is_some_and(|(ia, ib)| tolerance::is_equal(ia, ib, tol))
    }

    /// Non-parallel lines cross exactly once. Coincident lines do not count.
    fn are_intersecting(&self) -> bool {
        !self.first().is_parallel(self.second())
    }

    fn intersection_coordinates(&self) -> Result<Vec<CartesianCoordinate>> {
        if !self.are_intersecting() {
            return Ok(Vec::new());
        }

        let (p1, p2) = (self.first().i(), self.first().j());
        let (p3, p4) = (self.second().i(), self.second().j());

        let (dx12, dy12) = (p1.x() - p2.x(), p1.y() - p2.y());
        let (dx34, dy34) = (p3.x() - p4.x(), p3.y() - p4.y());
        let denominator = dx12 * dy34 - dy12 * dx34;
        let a = p1.cross_product(&p2);
        let b = p3.cross_product(&p4);

        let x = (a * dx34 - dx12 * b) / denominator;
        let y = (a * dy34 - dy12 * b) / denominator;
        trace!(denominator, x, y, "line/line crossing");

        if !x.is_finite() || !y.is_finite() {
            return Ok(Vec::new());
        }
        Ok(vec![CartesianCoordinate::with_tolerance(
            x,
            y,
            self.tolerance(),
        )])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::intersection::Intersect;
    use approx::assert_abs_diff_eq;

    fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> LinearCurve {
        LinearCurve::new(
            CartesianCoordinate::new(x0, y0),
            CartesianCoordinate::new(x1, y1),
        )
        .unwrap()
    }

    #[test]
    fn perpendicular_crossing() {
        let a = line(0.0, 0.0, 2.0, 2.0);
        let b = line(0.0, 2.0, 2.0, 0.0);
        let pair = a.intersection_with(&b);
        assert!(pair.are_intersecting());
        assert!(!pair.are_tangent());
        let points = pair.intersection_coordinates().unwrap();
        assert_eq!(points.len(), 1);
        assert_abs_diff_eq!(points[0], CartesianCoordinate::new(1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn vertical_and_sloped() {
        let a = line(3.0, -10.0, 3.0, 10.0);
        let b = line(0.0, 1.0, 1.0, 3.0);
        let points = a.intersection_with(&b).intersection_coordinates().unwrap();
        assert_eq!(points.len(), 1);
        assert_abs_diff_eq!(points[0], CartesianCoordinate::new(3.0, 7.0), epsilon = 1e-12);
    }

    #[test]
    fn order_does_not_matter() {
        let a = line(-1.3, 0.7, 4.1, 2.9);
        let b = line(0.2, 5.5, 1.9, -3.25);
        let ab = a.intersection_with(&b);
        let ba = b.intersection_with(&a);
        assert_eq!(ab.are_intersecting(), ba.are_intersecting());
        assert_eq!(ab.are_tangent(), ba.are_tangent());
        let p = ab.intersection_coordinates().unwrap();
        let q = ba.intersection_coordinates().unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p[0].x(), q[0].x());
        assert_eq!(p[0].y(), q[0].y());
    }

    #[test]
    fn parallel_lines_do_not_meet() {
        let a = line(0.0, 0.0, 1.0, 1.0);
        let b = line(0.0, 1.0, 1.0, 2.0);
        let pair = a.intersection_with(&b);
        assert!(!pair.are_intersecting());
        assert!(!pair.are_tangent());
        assert!(pair.intersection_coordinates().unwrap().is_empty());
    }

    #[test]
    fn coincident_lines_are_tangent() {
        let a = line(0.0, 1.0, 1.0, 3.0);
        let b = line(-2.0, -3.0, 5.0, 11.0);
        let pair = a.intersection_with(&b);
        assert!(pair.are_tangent());
        assert!(!pair.are_intersecting());
        assert!(pair.intersection_coordinates().unwrap().is_empty());
    }

    #[test]
    fn coincident_vertical_lines_are_tangent() {
        let a = line(2.0, 0.0, 2.0, 1.0);
        let b = line(2.0, 5.0, 2.0, -5.0);
        assert!(a.intersection_with(&b).are_tangent());
        let c = line(2.5, 0.0, 2.5, 1.0);
        assert!(!a.intersection_with(&c).are_tangent());
        assert!(!a.intersection_with(&c).are_intersecting());
    }

    #[test]
    fn coincident_horizontal_lines_are_tangent() {
        let a = line(0.0, 4.0, 1.0, 4.0);
        let b = line(-7.0, 4.0, 9.0, 4.0);
        assert!(a.intersection_with(&b).are_tangent());
    }

    #[test]
    fn result_carries_stricter_tolerance() {
        let a = LinearCurve::new(
            CartesianCoordinate::with_tolerance(0.0, 0.0, 1e-3),
            CartesianCoordinate::with_tolerance(1.0, 0.0, 1e-3),
        )
        .unwrap();
        let b = LinearCurve::new(
            CartesianCoordinate::with_tolerance(0.5, -1.0, 1e-6),
            CartesianCoordinate::with_tolerance(0.5, 1.0, 1e-6),
        )
        .unwrap();
        let points = a.intersection_with(&b).intersection_coordinates().unwrap();
        assert_eq!(points[0].tolerance(), 1e-6);
    }
}
