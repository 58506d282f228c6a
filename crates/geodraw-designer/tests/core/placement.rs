//! Vertex placement protocol integration tests

use geodraw_designer::{
    EdgeClearance, PlacementError, PlacementRules, Point, Shape, ShapeKind, ShapePhase,
};

use crate::common::{build, SCRIPT};

#[test]
fn test_every_kind_completes_exactly_once() {
    for kind in ShapeKind::ALL {
        let (shape, completions) = build(kind, &SCRIPT[..kind.max_vertices()]);
        assert_eq!(completions, 1, "{kind}");
        assert_eq!(shape.vertices().len(), kind.max_vertices(), "{kind}");
        assert_eq!(shape.phase(), ShapePhase::Finalized, "{kind}");
        assert!(shape.metrics().is_some(), "{kind}");
    }
}

#[test]
fn test_completion_reported_on_last_append_only() {
    let mut shape = Shape::new(ShapeKind::Trapezoid);
    let results: Vec<bool> = SCRIPT
        .iter()
        .map(|&p| shape.append_point(Point::from(p)).unwrap())
        .collect();
    assert_eq!(results, vec![false, false, false, true]);
}

#[test]
fn test_metrics_absent_until_finalized() {
    let mut shape = Shape::new(ShapeKind::Rectangle);
    for &p in &SCRIPT[..3] {
        shape.append_point(Point::from(p)).unwrap();
        assert!(shape.metrics().is_none());
        assert!(shape.area().is_none());
    }
    shape.append_point(Point::from(SCRIPT[3])).unwrap();
    assert_eq!(shape.area(), Some(200.0 * 120.0));
}

#[test]
fn test_free_vertices_are_the_cursor() {
    let (shape, _) = build(ShapeKind::Parallelogram, &SCRIPT);
    assert_eq!(
        &shape.vertices()[..3],
        &[Point::new(0, 0), Point::new(200, 0), Point::new(230, 120)]
    );
}

#[test]
fn test_opposite_ends_of_the_coordinate_range() {
    let mut shape = Shape::new(ShapeKind::Square);
    shape.append_point(Point::new(i32::MIN, 0)).unwrap();
    assert_eq!(shape.append_point(Point::new(i32::MAX, 0)), Ok(false));

    // Derived vertices are clamped to the lattice instead of wrapping.
    assert_eq!(shape.append_point(Point::new(0, 5)), Ok(false));
    assert_eq!(shape.vertices()[2], Point::new(i32::MAX, i32::MAX));
    assert_eq!(shape.append_point(Point::new(0, 5)), Ok(true));
    assert_eq!(shape.vertices()[3], Point::new(-1, i32::MAX));
}

#[test]
fn test_second_point_within_nine_is_rejected() {
    for (dx, dy) in [(9, 0), (0, -9), (6, 6), (-5, 7)] {
        let mut shape = Shape::new(ShapeKind::Square);
        shape.append_point(Point::new(100, 100)).unwrap();
        let err = shape.append_point(Point::new(100 + dx, 100 + dy)).unwrap_err();
        assert!(matches!(err, PlacementError::TooCloseToVertex { .. }), "({dx}, {dy})");
        assert_eq!(shape.vertices().len(), 1);
    }
}

#[test]
fn test_rejection_then_retry() {
    let mut shape = Shape::new(ShapeKind::ScaleneTriangle);
    shape.append_point(Point::new(0, 0)).unwrap();
    shape.append_point(Point::new(100, 0)).unwrap();

    assert!(shape.append_point(Point::new(40, 3)).is_err());
    assert_eq!(shape.vertices().len(), 2);
    assert_eq!(shape.append_point(Point::new(40, 30)), Ok(true));
}

#[test]
fn test_derived_vertex_ignores_cursor_position() {
    let mut shape = Shape::new(ShapeKind::Parallelogram);
    for p in [(0, 0), (100, 0), (100, 100)] {
        shape.append_point(Point::from(p)).unwrap();
    }
    assert_eq!(shape.append_point(Point::new(50, 50)), Ok(true));
    assert_eq!(shape.vertices()[3], Point::new(0, 100));
}

#[test]
fn test_custom_rules() {
    let rules = PlacementRules {
        min_vertex_spacing: 50.0,
        min_edge_clearance: 20.0,
        edge_clearance: EdgeClearance::Segment,
    };
    let mut shape = Shape::with_rules(ShapeKind::ScaleneTriangle, rules);
    shape.append_point(Point::new(0, 0)).unwrap();
    assert!(shape.append_point(Point::new(40, 0)).is_err());
    shape.append_point(Point::new(60, 0)).unwrap();

    match shape.append_point(Point::new(30, 15)) {
        Err(PlacementError::TooCloseToEdge { distance, min, .. }) => {
            assert_eq!(distance, 15.0);
            assert_eq!(min, 20.0);
        }
        other => panic!("expected edge rejection, got {other:?}"),
    }
}

#[test]
fn test_line_clearance_rejects_edge_extension() {
    let rules = PlacementRules {
        edge_clearance: EdgeClearance::Line,
        ..PlacementRules::default()
    };
    let mut shape = Shape::with_rules(ShapeKind::Trapezoid, rules);
    shape.append_point(Point::new(0, 0)).unwrap();
    shape.append_point(Point::new(100, 0)).unwrap();

    let err = shape.append_point(Point::new(-80, 3)).unwrap_err();
    assert_eq!(err.tag(), "too_close_to_edge");
}

#[test]
fn test_append_after_finalized() {
    let (mut shape, _) = build(ShapeKind::IsoscelesTriangle, &SCRIPT[..3]);
    let before = shape.clone();
    assert_eq!(
        shape.append_point(Point::new(1000, 1000)),
        Err(PlacementError::ShapeFinalized { vertices: 3 })
    );
    assert_eq!(shape, before);
}
