use tracing::trace;

use super::{CurveIntersection, Intersection};
use crate::error::Result;
use crate::geometry::{
    CartesianCoordinate, CartesianOffset, CircularCurve, LinearCurve, Transformations,
};
use crate::math::tolerance::{self, Tolerant};

/// Quantities of the closed-form solution, all in the circle's local frame.
///
/// With the line's control points `p1`, `p2` expressed relative to the circle
/// center, `D = p1 × p2`, `dr = |p2 - p1|` and the discriminant is
/// `Δ = (r·dr)² - D²`. `Δ < 0` misses, `Δ = 0` touches, `Δ > 0` crosses twice.
#[derive(Debug, Clone, Copy)]
struct LocalTerms {
    determinant: f64,
    dx: f64,
    dy: f64,
    dr_squared: f64,
    discriminant: f64,
}

impl LocalTerms {
    fn new(p1: &CartesianCoordinate, p2: &CartesianCoordinate, radius: f64, tol: f64) -> Self {
        let determinant = tolerance::snap_to_zero(p1.cross_product(p2), tol);
        let dx = p2.x() - p1.x();
        let dy = p2.y() - p1.y();
        let dr_squared = dx * dx + dy * dy;
        let discriminant = tolerance::snap_to_zero(
            radius * radius * dr_squared - determinant * determinant,
            tol,
        );
        trace!(determinant, dr_squared, discriminant, "line/circle terms");
        Self {
            determinant,
            dx,
            dy,
            dr_squared,
            discriminant,
        }
    }

    /// The `+` branch when `sign` is 1, the `-` branch when it is -1.
    fn point(&self, sign: f64) -> (f64, f64) {
        let root = self.discriminant.sqrt();
        let sgn_dy = if self.dy < 0.0 { -1.0 } else { 1.0 };
        let x = (self.determinant * self.dy + sign * sgn_dy * self.dx * root) / self.dr_squared;
        let y = (-self.determinant * self.dx + sign * self.dy.abs() * root) / self.dr_squared;
        (x, y)
    }
}

impl Intersection<'_, LinearCurve, CircularCurve> {
    /// Frame with the circle center at the origin and axes parallel to the global ones.
    fn local_frame(&self) -> Result<Transformations> {
        let center = self.second().center();
        Transformations::new(center, center + CartesianOffset::from_delta(1.0, 0.0))
    }

    /// Terms for classification.
    ///
    /// The local frame is a pure translation, so the control points are
    /// shifted directly and classification cannot fail.
    fn terms(&self) -> LocalTerms {
        let center = self.second().center();
        LocalTerms::new(
            &(self.first().i() - center),
            &(self.first().j() - center),
            self.second().radius(),
            self.tolerance(),
        )
    }

    /// The discriminant `Δ` after snapping values within tolerance to zero.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        self.terms().discriminant
    }
}

impl CurveIntersection for Intersection<'_, LinearCurve, CircularCurve> {
    fn are_tangent(&self) -> bool {
        self.discriminant() == 0.0
    }

    fn are_intersecting(&self) -> bool {
        self.discriminant() >= 0.0
    }

    fn intersection_coordinates(&self) -> Result<Vec<CartesianCoordinate>> {
        let tol = self.tolerance();
        let frame = self.local_frame()?;
        let terms = LocalTerms::new(
            &frame.to_local(&self.first().i()),
            &frame.to_local(&self.first().j()),
            self.second().radius(),
            tol,
        );

        let signs: &[f64] = if terms.discriminant < 0.0 {
            &[]
        } else if terms.discriminant == 0.0 {
            &[1.0]
        } else {
            &[1.0, -1.0]
        };

        Ok(signs
            .iter()
            .map(|&sign| {
                let (x, y) = terms.point(sign);
                let global = frame.to_global(&CartesianCoordinate::new(x, y));
                CartesianCoordinate::with_tolerance(global.x(), global.y(), tol)
            })
            .collect())
    }
}

impl CurveIntersection for Intersection<'_, CircularCurve, LinearCurve> {
    fn are_tangent(&self) -> bool {
        self.swapped().are_tangent()
    }

    fn are_intersecting(&self) -> bool {
        self.swapped().are_intersecting()
    }

    fn intersection_coordinates(&self) -> Result<Vec<CartesianCoordinate>> {
        self.swapped().intersection_coordinates()
    }
}
