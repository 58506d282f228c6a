//! Ghost preview integration tests

use geodraw_designer::{Point, Preview, Segment, Shape, ShapeKind};

use crate::common::build;

#[test]
fn test_preview_uses_same_candidate_as_append() {
    for kind in ShapeKind::ALL {
        if kind.free_points() == kind.max_vertices() {
            continue;
        }
        let (mut shape, _) = build(kind, &[(0, 0), (200, 0)]);
        if kind.free_points() == 3 {
            shape.append_point(Point::new(230, 120)).unwrap();
        }
        let cursor = Point::new(40, 150);
        let preview = shape.preview(cursor);
        let candidate = shape.next_candidate(cursor).unwrap();

        match preview {
            Preview::Segments(segments) => {
                assert_eq!(segments.last().map(|s| s.end), Some(candidate), "{kind}");
            }
            Preview::Ellipse(outline) => {
                let mid = shape.vertices()[0] + shape.vertices()[1];
                assert_eq!(outline.center, Point::new(mid.x / 2, mid.y / 2), "{kind}");
                let expected = outline.center.distance_to(&candidate) * 2.0;
                assert_eq!(outline.axis2, expected, "{kind}");
            }
            Preview::Empty => panic!("{kind}: empty preview mid-construction"),
        }

        let before = shape.vertices().to_vec();
        shape.append_point(cursor).unwrap();
        assert_eq!(shape.vertices()[before.len()], candidate, "{kind}");
    }
}

#[test]
fn test_single_vertex_preview() {
    let (shape, _) = build(ShapeKind::Rhombus, &[(10, 10)]);
    assert_eq!(
        shape.preview(Point::new(80, 10)),
        Preview::Segments(vec![Segment::new(Point::new(10, 10), Point::new(80, 10))])
    );
}

#[test]
fn test_preview_does_not_mutate() {
    let (shape, _) = build(ShapeKind::Square, &[(0, 0), (100, 0)]);
    let before = shape.clone();
    for x in -50..50 {
        let _ = shape.preview(Point::new(x * 7, x * 3));
    }
    assert_eq!(shape, before);
}

#[test]
fn test_finalized_shape_has_no_preview() {
    let (shape, _) = build(ShapeKind::ScaleneTriangle, &[(0, 0), (100, 0), (0, 100)]);
    assert_eq!(shape.preview(Point::new(5, 5)), Preview::Empty);
    assert_eq!(Shape::new(ShapeKind::Circle).preview(Point::new(5, 5)), Preview::Empty);
}
