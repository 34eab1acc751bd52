pub mod coordinate;
pub mod curve;
pub mod offset;
pub mod polar;
pub mod transform;

pub use coordinate::CartesianCoordinate;
pub use curve::{CircularCurve, Curve, CurveDomain, LinearCurve};
pub use offset::CartesianOffset;
pub use polar::PolarCoordinate;
pub use transform::Transformations;
