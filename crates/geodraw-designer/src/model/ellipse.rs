//! Ellipse-family resolvers.
//!
//! An ellipse is stored as the four ends of its axes: `v0, v1` span the
//! first axis, `v2, v3` the second. Both axes cross at the midpoint of
//! `v0 v1`.

use geodraw_core::{midpoint, Point};

use super::project_perpendicular;

/// `v0, v1` free; `v2` on the perpendicular bisector of the first axis;
/// `v3 = v0 - (v2 - v1)` mirrors `v2` through the first axis' midpoint.
pub(crate) fn ellipse(vertices: &[Point], cursor: Point) -> Point {
    let (v0, v1) = (vertices[0], vertices[1]);
    if vertices.len() == 2 {
        project_perpendicular(v0, v1, midpoint(v0, v1), cursor)
    } else {
        v0 - (vertices[2] - v1)
    }
}

/// `v0, v1` free; `v2` and `v3` are the half-axis `mid - v0` turned by a
/// right angle about the midpoint, one per side. The cursor is ignored.
pub(crate) fn circle(vertices: &[Point], _cursor: Point) -> Point {
    let mid = midpoint(vertices[0], vertices[1]);
    let half = mid - vertices[0];
    let turned = half.quarter_turn();
    if vertices.len() == 2 {
        mid + turned
    } else {
        mid - turned
    }
}
