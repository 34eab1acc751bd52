pub mod error;
pub mod geometry;
pub mod intersection;
pub mod math;

pub use error::{GeoplaneError, Result};
pub use geometry::{
    CartesianCoordinate, CartesianOffset, CircularCurve, Curve, LinearCurve, PolarCoordinate,
    Transformations,
};
pub use intersection::{CurveIntersection, Intersect, Intersection};
pub use math::{Angle, Tolerant, ZERO_TOLERANCE};
