use thiserror::Error;

/// Top-level error type for the Geoplane kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoplaneError {
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Invalid operations on value types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArithmeticError {
    #[error("cannot divide {operand} by zero")]
    DivideByZero { operand: &'static str },
}

/// Errors raised when a geometric precondition does not hold.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("reference points coincide at ({x}, {y}); direction is undefined")]
    CoincidentReferencePoints { x: f64, y: f64 },

    #[error("control points coincide at ({x}, {y}); line is undefined")]
    CoincidentControlPoints { x: f64, y: f64 },

    #[error("radius {radius} must be non-negative and finite")]
    InvalidRadius { radius: f64 },

    #[error("zero-length offset has no direction")]
    ZeroLengthOffset,

    #[error("concentric circles of radii {r1} and {r2} have no radical line")]
    ConcentricCircles { r1: f64, r2: f64 },

    #[error(
        "circles do not intersect: separation {separation} exceeds radii sum {r1} + {r2}"
    )]
    DisjointCircles { separation: f64, r1: f64, r2: f64 },

    #[error(
        "circle of radius {inner} lies inside circle of radius {outer} (separation {separation})"
    )]
    NestedCircles {
        separation: f64,
        inner: f64,
        outer: f64,
    },
}

/// Convenience type alias for results using [`GeoplaneError`].
pub type Result<T> = std::result::Result<T, GeoplaneError>;
