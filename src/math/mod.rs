pub mod angle;
pub mod tolerance;

pub use angle::Angle;
pub use tolerance::{combined_tolerance, combined_tolerance_of, Tolerant};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Rigid 2D transformation (rotation followed by translation).
pub type Isometry2 = nalgebra::Isometry2<f64>;

/// Default absolute tolerance for values constructed without one.
pub const ZERO_TOLERANCE: f64 = 1e-10;

/// Lower bound on the decimal digits used when rounding during angle normalization.
pub const MIN_ROUNDING_DIGITS: u32 = 6;

/// Upper bound on the decimal digits used when rounding; `f64` carries no more.
pub const MAX_ROUNDING_DIGITS: u32 = 15;
