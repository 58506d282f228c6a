//! Quadrilateral resolvers.
//!
//! Vertices go around the outline in placement order. The parallelogram
//! family closes with `v3 = v2 + (v0 - v1)`, which only holds when `v1` is
//! the corner shared by the first two sides; swapping roles breaks it.

use geodraw_core::{
    dominant_axis, edge_length, rescale_from, slope, x_on_line, y_on_line, Axis, Point,
};

use super::{parallelogram_law, project_perpendicular};

/// `v0, v1, v2` free; `v3` by the parallelogram law.
pub(crate) fn parallelogram(vertices: &[Point], _cursor: Point) -> Point {
    parallelogram_law(vertices)
}

/// `v0, v1` free; `v2` on the circle of radius `|v0 v1|` around `v1`, in the
/// cursor's direction; `v3` by the parallelogram law.
pub(crate) fn rhombus(vertices: &[Point], cursor: Point) -> Point {
    if vertices.len() == 2 {
        let side = edge_length(vertices[0], vertices[1]);
        rescale_from(vertices[1], cursor, side)
    } else {
        parallelogram_law(vertices)
    }
}

/// `v0, v1` free; `v2` on the perpendicular to `v0 v1` through `v1`; `v3` by
/// the parallelogram law.
pub(crate) fn rectangle(vertices: &[Point], cursor: Point) -> Point {
    if vertices.len() == 2 {
        project_perpendicular(vertices[0], vertices[1], vertices[1], cursor)
    } else {
        parallelogram_law(vertices)
    }
}

/// `v0, v1` free; `v2` is `v1 - v0` turned by a right angle at `v1`, on the
/// cursor's side of the base; `v3` by the parallelogram law.
pub(crate) fn square(vertices: &[Point], cursor: Point) -> Point {
    if vertices.len() != 2 {
        return parallelogram_law(vertices);
    }

    let (v0, v1) = (vertices[0], vertices[1]);
    let base = v1 - v0;
    let turned = base.quarter_turn();

    // Compare along the axis the turned side actually moves in.
    let keep = match dominant_axis(v0, v1) {
        Axis::Horizontal => (cursor.y > v1.y) == (turned.y > 0),
        Axis::Vertical => (cursor.x > v1.x) == (turned.x > 0),
    };

    if keep {
        v1 + turned
    } else {
        v1 - turned
    }
}

/// `v0, v1, v2` free; `v3` on the line through `v2` parallel to `v0 v1`.
pub(crate) fn trapezoid(vertices: &[Point], cursor: Point) -> Point {
    let (v0, v1) = (vertices[0], vertices[1]);
    let last = vertices[vertices.len() - 1];
    let m = slope(v1, v0);
    match dominant_axis(v0, v1) {
        Axis::Horizontal => y_on_line(last, m, cursor.x),
        Axis::Vertical => x_on_line(last, m, cursor.y),
    }
}
