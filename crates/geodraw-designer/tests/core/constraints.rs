//! Geometric laws each constructed shape must obey.

use geodraw_designer::{DrawingError, Point, ShapeKind};
use proptest::prelude::*;

use crate::common::{build, corner_dot, edge_lengths, finished};

#[test]
fn test_equal_sided_kinds() {
    for kind in [ShapeKind::Square, ShapeKind::Rhombus, ShapeKind::EquilateralTriangle] {
        let shape = finished(kind);
        let lengths = edge_lengths(shape.vertices());
        let first = lengths[0];
        for len in &lengths {
            assert!((len - first).abs() <= 1.0, "{kind}: edges {lengths:?}");
        }
    }
}

#[test]
fn test_square_on_aligned_and_tilted_bases() {
    let (square, _) = build(ShapeKind::Square, &[(0, 0), (100, 0), (50, 80), (0, 0)]);
    assert_eq!(
        square.vertices(),
        &[Point::new(0, 0), Point::new(100, 0), Point::new(100, 100), Point::new(0, 100)]
    );

    // 5-12-13 base: every side is exactly 130.
    let (tilted, _) = build(ShapeKind::Square, &[(0, 0), (120, 50), (100, 150), (0, 0)]);
    assert_eq!(tilted.vertices()[2], Point::new(70, 170));
    assert_eq!(tilted.vertices()[3], Point::new(-50, 120));
    assert_eq!(edge_lengths(tilted.vertices()), vec![130.0; 4]);
}

#[test]
fn test_right_angles() {
    let cases = [
        (ShapeKind::Rectangle, [(0, 0), (100, 0), (130, 60), (0, 0)]),
        (ShapeKind::Rectangle, [(0, 0), (120, 50), (90, 170), (0, 0)]),
        (ShapeKind::Square, [(0, 0), (0, 120), (-40, 60), (0, 0)]),
        (ShapeKind::Square, [(10, 10), (130, 60), (0, 200), (0, 0)]),
    ];
    for (kind, points) in cases {
        let (shape, _) = build(kind, &points);
        for corner in 0..4 {
            assert_eq!(corner_dot(shape.vertices(), corner), 0, "{kind} {points:?} at {corner}");
        }
    }
}

#[test]
fn test_isosceles_legs_match() {
    let (shape, _) = build(ShapeKind::IsoscelesTriangle, &[(0, 0), (120, 0), (10, 90)]);
    let v = shape.vertices();
    assert_eq!(v[2], Point::new(60, 90));
    assert_eq!(v[0].distance_to(&v[2]), v[1].distance_to(&v[2]));
}

#[test]
fn test_equilateral_height() {
    let (shape, _) = build(ShapeKind::EquilateralTriangle, &[(0, 0), (100, 0), (30, 20)]);
    let mid = Point::new(50, 0);
    let height = mid.distance_to(&shape.vertices()[2]);
    assert!((height - 86.60).abs() < 1.0, "height {height}");
}

#[test]
fn test_trapezoid_sides_parallel() {
    let (shape, _) = build(ShapeKind::Trapezoid, &[(0, 0), (200, 100), (220, 160), (40, 400)]);
    let v = shape.vertices();
    let base = v[1] - v[0];
    let top = v[3] - v[2];
    // Cross product of the parallel sides vanishes up to truncation.
    let cross = i64::from(base.x) * i64::from(top.y) - i64::from(base.y) * i64::from(top.x);
    assert!(cross.abs() <= i64::from(base.x.abs() + base.y.abs()), "cross {cross}");
}

#[test]
fn test_ellipse_axes_cross_at_midpoint() {
    for kind in [ShapeKind::Ellipse, ShapeKind::Circle] {
        let shape = finished(kind);
        let v = shape.vertices();
        assert_eq!(v[2] + v[3], v[0] + v[1], "{kind}");
    }

    let circle = finished(ShapeKind::Circle);
    let v = circle.vertices();
    assert_eq!(v[2].distance_to(&v[3]), v[0].distance_to(&v[1]));
}

proptest! {
    #[test]
    fn parallelogram_law_holds(
        x0 in -500i32..500, y0 in -500i32..500,
        x1 in -500i32..500, y1 in -500i32..500,
        x2 in -500i32..500, y2 in -500i32..500,
        kind_index in 0usize..4,
    ) {
        let kind = [
            ShapeKind::Parallelogram,
            ShapeKind::Rhombus,
            ShapeKind::Rectangle,
            ShapeKind::Square,
        ][kind_index];

        let mut shape = geodraw_designer::Shape::new(kind);
        let accepted = [(x0, y0), (x1, y1), (x2, y2), (x2, y2)]
            .into_iter()
            .all(|p| shape.append_point(Point::from(p)).is_ok());
        prop_assume!(accepted);

        let v = shape.vertices();
        prop_assert_eq!(v[3], v[2] + (v[0] - v[1]));
    }

    #[test]
    fn translate_round_trip_restores_vertices(
        kind_index in 0usize..10,
        dx in -10_000i32..10_000,
        dy in -10_000i32..10_000,
    ) {
        let kind = ShapeKind::ALL[kind_index];
        let original = finished(kind);
        let mut shape = original.clone();

        prop_assert!(shape.translate(dx, dy).is_ok());
        prop_assert_eq!(shape.metrics(), original.metrics());
        prop_assert!(shape.translate(-dx, -dy).is_ok());
        prop_assert_eq!(shape.vertices(), original.vertices());
    }

    #[test]
    fn translate_by_any_offset_moves_all_or_nothing(
        kind_index in 0usize..10,
        dx in any::<i32>(),
        dy in any::<i32>(),
    ) {
        let kind = ShapeKind::ALL[kind_index];
        let original = finished(kind);
        let mut shape = original.clone();

        let fits = original
            .vertices()
            .iter()
            .all(|v| v.x.checked_add(dx).is_some() && v.y.checked_add(dy).is_some());
        match shape.translate(dx, dy) {
            Ok(()) => {
                prop_assert!(fits);
                prop_assert_eq!(shape.vertices()[0], original.vertices()[0].offset(dx, dy));
            }
            Err(err) => {
                prop_assert!(!fits);
                prop_assert_eq!(err, DrawingError::OffsetOutOfRange { dx, dy });
                prop_assert_eq!(&shape, &original);
            }
        }
    }

    #[test]
    fn construction_accepts_the_whole_coordinate_range(
        kind_index in 0usize..10,
        points in prop::collection::vec((any::<i32>(), any::<i32>()), 4),
    ) {
        let kind = ShapeKind::ALL[kind_index];
        let mut shape = geodraw_designer::Shape::new(kind);
        for &p in &points {
            let _ = shape.preview(Point::from(p));
            let _ = shape.append_point(Point::from(p));
        }
        prop_assert!(shape.vertices().len() <= kind.max_vertices());
        if shape.is_finalized() {
            prop_assert!(shape.metrics().is_some());
        }
    }
}
