//! Property-based tests for kernel invariants using the `proptest` crate.

#![allow(clippy::unwrap_used)]

use std::f64::consts::PI;

use geoplane::math::angle::{degrees_to_radians, normalize, radians_to_degrees};
use geoplane::math::{combined_tolerance, combined_tolerance_of};
use geoplane::{
    Angle, CartesianCoordinate, CircularCurve, CurveIntersection, Intersect, LinearCurve,
    Transformations, ZERO_TOLERANCE,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_coordinate() -> impl Strategy<Value = CartesianCoordinate> {
    (-100.0f64..100.0, -100.0f64..100.0).prop_map(|(x, y)| CartesianCoordinate::new(x, y))
}

fn arb_line() -> impl Strategy<Value = LinearCurve> {
    (arb_coordinate(), arb_coordinate())
        .prop_filter_map("control points coincide", |(i, j)| LinearCurve::new(i, j).ok())
}

fn arb_circle() -> impl Strategy<Value = CircularCurve> {
    (arb_coordinate(), 0.1f64..50.0)
        .prop_map(|(center, radius)| CircularCurve::new(center, radius).unwrap())
}

const TOL: f64 = 1e-6;

// ---------------------------------------------------------------------------
// Angles and tolerances
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn normalization_is_range_bound_and_idempotent(
        radians in prop_oneof![-1.0e4f64..1.0e4, -1.0e300f64..1.0e300],
    ) {
        let once = normalize(radians, ZERO_TOLERANCE);
        prop_assert!(once > -PI && once <= PI, "normalize({}) = {}", radians, once);
        let twice = normalize(once, ZERO_TOLERANCE);
        prop_assert!((twice - once).abs() < 1e-9, "{} != {}", twice, once);
        prop_assert_eq!(Angle::new(radians), Angle::new(once));
    }

    #[test]
    fn degrees_round_trip(degrees in -1.0e6f64..1.0e6) {
        let back = radians_to_degrees(degrees_to_radians(degrees));
        prop_assert!((back - degrees).abs() <= 1e-9 * degrees.abs().max(1.0));
    }

    #[test]
    fn stricter_tolerance_wins(a in 0.0f64..1.0, b in 0.0f64..1.0) {
        let (strict, loose) = if a <= b { (a, b) } else { (b, a) };
        prop_assert_eq!(combined_tolerance(strict, loose), strict);
        let x = CartesianCoordinate::with_tolerance(0.0, 0.0, strict);
        let y = Angle::with_tolerance(0.0, loose);
        prop_assert_eq!(combined_tolerance_of(&x, &y), strict);
    }

    #[test]
    fn angle_arithmetic_stays_normalized(a in -50.0f64..50.0, b in -50.0f64..50.0, k in -10.0f64..10.0) {
        for angle in [Angle::new(a) + Angle::new(b), Angle::new(a) - Angle::new(b), Angle::new(a) * k] {
            prop_assert!(angle.radians() > -PI && angle.radians() <= PI);
        }
    }
}

// ---------------------------------------------------------------------------
// Frame transform
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn transform_round_trip(
        origin in arb_coordinate(),
        direction in arb_coordinate(),
        p in arb_coordinate(),
    ) {
        prop_assume!(origin.distance_to(&direction) > 1e-3);
        let frame = Transformations::new(origin, direction).unwrap();
        let back = frame.to_global(&frame.to_local(&p));
        prop_assert!(back.distance_to(&p) < TOL, "{} -> {}", p, back);
        let local_direction = frame.to_local(&direction);
        prop_assert!(local_direction.y().abs() < TOL);
        prop_assert!(local_direction.x() > 0.0);
    }
}

// ---------------------------------------------------------------------------
// Intersections
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn line_line_is_symmetric(a in arb_line(), b in arb_line()) {
        let ab = a.intersection_with(&b);
        let ba = b.intersection_with(&a);
        prop_assert_eq!(ab.are_intersecting(), ba.are_intersecting());
        prop_assert_eq!(ab.are_tangent(), ba.are_tangent());
        let p = ab.intersection_coordinates().unwrap();
        let q = ba.intersection_coordinates().unwrap();
        prop_assert_eq!(p.len(), q.len());
        for (p, q) in p.iter().zip(&q) {
            prop_assert!(p.x().to_bits() == q.x().to_bits() && p.y().to_bits() == q.y().to_bits());
        }
    }

    #[test]
    fn line_circle_points_lie_on_circle(l in arb_line(), c in arb_circle()) {
        let pair = l.intersection_with(&c);
        let points = pair.intersection_coordinates().unwrap();
        prop_assert_eq!(points.is_empty(), !pair.are_intersecting());
        if pair.are_tangent() {
            prop_assert_eq!(points.len(), 1);
        }
        for p in &points {
            let error = (p.distance_to(&c.center()) - c.radius()).abs();
            prop_assert!(error < 1e-6 * c.radius().max(1.0), "off circle by {}", error);
        }
    }

    #[test]
    fn circle_circle_points_lie_on_both(a in arb_circle(), b in arb_circle()) {
        let pair = a.intersection_with(&b);
        let separation = pair.center_separation();
        prop_assume!(separation > 1e-3);
        prop_assume!(separation >= (a.radius() - b.radius()).abs() + 1e-3);

        let points = pair.intersection_coordinates().unwrap();
        prop_assert_eq!(points.is_empty(), !pair.are_intersecting());
        for p in &points {
            prop_assert!((p.distance_to(&a.center()) - a.radius()).abs() < 1e-6);
            prop_assert!((p.distance_to(&b.center()) - b.radius()).abs() < 1e-6);
        }
    }
}
