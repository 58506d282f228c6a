//! Drawing state integration tests

use geodraw_designer::{
    Construction, DrawingError, DrawingState, PlacementError, PlacementRules, Point, Preview,
    ShapeKind,
};

use crate::common::SCRIPT;

fn add(state: &mut DrawingState, kind: ShapeKind) {
    state.begin_shape(kind).unwrap();
    for &p in &SCRIPT[..kind.max_vertices()] {
        state.append_point(Point::from(p)).unwrap();
    }
}

#[test]
fn test_drawing_state_complete_workflow() {
    let mut state = DrawingState::new();
    assert!(state.is_empty());
    assert_eq!(state.construction(), &Construction::Idle);

    add(&mut state, ShapeKind::Square);
    add(&mut state, ShapeKind::EquilateralTriangle);
    add(&mut state, ShapeKind::Circle);
    assert_eq!(state.len(), 3);

    // Translate one shape, then the whole drawing.
    state.translate_shape(1, 10, 10).unwrap();
    assert_eq!(state.shapes()[1].vertices()[0], Point::new(10, 10));
    assert_eq!(state.translate_all(-10, 0), Ok(3));
    assert_eq!(state.shapes()[1].vertices()[0], Point::new(0, 10));
    assert_eq!(state.shapes()[0].vertices()[0], Point::new(-10, 0));

    // Remove the middle one.
    let removed = state.remove_shape(1).unwrap();
    assert_eq!(removed.kind(), ShapeKind::EquilateralTriangle);
    let kinds: Vec<_> = state.shapes().iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, vec![ShapeKind::Square, ShapeKind::Circle]);

    let summaries = state.summaries();
    assert!(summaries[0].starts_with("0: Square"));
    assert!(summaries[1].starts_with("1: Circle"));
}

#[test]
fn test_out_of_range_selection() {
    let mut state = DrawingState::new();
    assert_eq!(
        state.remove_shape(0).unwrap_err(),
        DrawingError::ShapeIndexOutOfRange { index: 0, len: 0 }
    );
    add(&mut state, ShapeKind::Rhombus);
    assert!(state.shape(0).is_ok());
    assert_eq!(
        state.shape(1).unwrap_err().to_string(),
        "Shape index 1 out of range, the drawing has 1 shapes"
    );
}

#[test]
fn test_placement_errors_pass_through() {
    let mut state = DrawingState::new();
    state.begin_shape(ShapeKind::Ellipse).unwrap();
    state.append_point(Point::new(0, 0)).unwrap();
    let err = state.append_point(Point::new(0, 5)).unwrap_err();
    assert!(matches!(
        err,
        DrawingError::Placement(PlacementError::TooCloseToVertex { .. })
    ));
}

#[test]
fn test_preview_through_state() {
    let mut state = DrawingState::new();
    assert_eq!(state.preview(Point::new(1, 1)), Preview::Empty);

    state.begin_shape(ShapeKind::Rectangle).unwrap();
    state.append_point(Point::new(0, 0)).unwrap();
    assert!(!state.preview(Point::new(50, 0)).is_empty());
}

#[test]
fn test_rules_apply_to_new_and_current_shapes() {
    let strict = PlacementRules {
        min_vertex_spacing: 100.0,
        ..PlacementRules::default()
    };
    let mut state = DrawingState::new();
    state.begin_shape(ShapeKind::Square).unwrap();
    state.append_point(Point::new(0, 0)).unwrap();

    state.set_rules(strict);
    assert_eq!(state.current_shape().map(|s| s.rules().min_vertex_spacing), Some(100.0));
    assert!(state.append_point(Point::new(60, 0)).is_err());
    assert_eq!(state.append_point(Point::new(100, 0)), Ok(false));
}
