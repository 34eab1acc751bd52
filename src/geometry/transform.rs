use tracing::debug;

use super::CartesianCoordinate;
use crate::error::{GeometryError, Result};
use crate::math::tolerance::{self, Tolerant};
use crate::math::{Angle, Isometry2};

/// Mapping between the global frame and a local frame.
///
/// The local frame has `origin` at `(0, 0)` and its positive x-axis pointing
/// towards the direction reference. Intersection routines build one per query
/// so that a curve becomes origin-centered or axis-aligned.
#[derive(Debug, Clone, Copy)]
pub struct Transformations {
    origin: CartesianCoordinate,
    rotation: Angle,
    isometry: Isometry2,
    tolerance: f64,
}

impl Transformations {
    /// Builds the frame from an origin and a point on its positive x-axis.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CoincidentReferencePoints`] if the two
    /// references coincide within their combined tolerance.
    pub fn new(origin: CartesianCoordinate, direction: CartesianCoordinate) -> Result<Self> {
        let tolerance = tolerance::combined_tolerance_of(&origin, &direction);
        let axis = origin.offset_to(&direction);
        if tolerance::is_zero(axis.length(), tolerance) {
            debug!(%origin, %direction, "rejected transform with coincident references");
            return Err(GeometryError::CoincidentReferencePoints {
                x: origin.x(),
                y: origin.y(),
            }
            .into());
        }

        let rotation = Angle::from_components(axis.x(), axis.y(), tolerance);
        let isometry = Isometry2::new(origin.to_vector(), rotation.radians());
        Ok(Self {
            origin,
            rotation,
            isometry,
            tolerance,
        })
    }

    /// Global position of the local origin.
    #[must_use]
    pub fn origin(&self) -> CartesianCoordinate {
        self.origin
    }

    /// Counter-clockwise rotation from the global x-axis to the local x-axis.
    #[must_use]
    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    /// Expresses a global coordinate in the local frame.
    #[must_use]
    pub fn to_local(&self, global: &CartesianCoordinate) -> CartesianCoordinate {
        let local = self.isometry.inverse_transform_point(global.point());
        CartesianCoordinate::from_point(local, self.combined_with(global))
    }

    /// Expresses a local coordinate in the global frame.
    #[must_use]
    pub fn to_global(&self, local: &CartesianCoordinate) -> CartesianCoordinate {
        let global = self.isometry.transform_point(local.point());
        CartesianCoordinate::from_point(global, self.combined_with(local))
    }

    fn combined_with(&self, coordinate: &CartesianCoordinate) -> f64 {
        tolerance::combined_tolerance(self.tolerance, coordinate.tolerance())
    }
}

impl Tolerant for Transformations {
    fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeoplaneError;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn direction_lands_on_positive_x_axis() {
        let origin = CartesianCoordinate::new(1.0, 1.0);
        let direction = CartesianCoordinate::new(1.0, 4.0);
        let frame = Transformations::new(origin, direction).unwrap();
        assert_abs_diff_eq!(frame.rotation().radians(), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(
            frame.to_local(&origin),
            CartesianCoordinate::origin(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            frame.to_local(&direction),
            CartesianCoordinate::new(3.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn local_point_maps_back() {
        let frame = Transformations::new(
            CartesianCoordinate::new(2.0, 0.0),
            CartesianCoordinate::new(3.0, 1.0),
        )
        .unwrap();
        let local = CartesianCoordinate::new(0.0, 2.0_f64.sqrt());
        assert_abs_diff_eq!(
            frame.to_global(&local),
            CartesianCoordinate::new(1.0, 1.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn round_trip() {
        let frame = Transformations::new(
            CartesianCoordinate::new(-5.0, 2.5),
            CartesianCoordinate::new(7.0, -3.0),
        )
        .unwrap();
        let p = CartesianCoordinate::new(12.25, -8.5);
        assert_abs_diff_eq!(frame.to_global(&frame.to_local(&p)), p, epsilon = 1e-9);
        assert_abs_diff_eq!(frame.to_local(&frame.to_global(&p)), p, epsilon = 1e-9);
    }

    #[test]
    fn coincident_references_are_rejected() {
        let p = CartesianCoordinate::new(3.0, -2.0);
        let err = Transformations::new(p, p).unwrap_err();
        assert!(matches!(
            err,
            GeoplaneError::Geometry(GeometryError::CoincidentReferencePoints { .. })
        ));
    }

    #[test]
    fn tolerance_is_stricter_reference() {
        let frame = Transformations::new(
            CartesianCoordinate::with_tolerance(0.0, 0.0, 1e-3),
            CartesianCoordinate::with_tolerance(1.0, 0.0, 1e-7),
        )
        .unwrap();
        assert_eq!(frame.tolerance(), 1e-7);
    }
}
