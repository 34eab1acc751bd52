use geoplane::{CartesianCoordinate, CircularCurve, LinearCurve};
use tracing_subscriber::EnvFilter;

/// Routes kernel trace events to the test output when `RUST_LOG` is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[allow(clippy::unwrap_used, dead_code)]
pub fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> LinearCurve {
    LinearCurve::new(
        CartesianCoordinate::new(x0, y0),
        CartesianCoordinate::new(x1, y1),
    )
    .unwrap()
}

#[allow(clippy::unwrap_used, dead_code)]
pub fn circle(x: f64, y: f64, radius: f64) -> CircularCurve {
    CircularCurve::new(CartesianCoordinate::new(x, y), radius).unwrap()
}
