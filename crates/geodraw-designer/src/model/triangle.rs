//! Triangle resolvers.
//!
//! Isosceles and equilateral triangles place `v0, v1` freely as the base;
//! the apex is constrained. A scalene triangle has no constrained vertex.

use geodraw_core::{edge_length, midpoint, rescale_from, Point};

use super::project_perpendicular;

/// All three vertices are free, so the cursor is the vertex.
pub(crate) fn scalene(_vertices: &[Point], cursor: Point) -> Point {
    cursor
}

/// Apex `v2` on the perpendicular bisector of the base `v0, v1`.
pub(crate) fn isosceles(vertices: &[Point], cursor: Point) -> Point {
    let (v0, v1) = (vertices[0], vertices[1]);
    project_perpendicular(v0, v1, midpoint(v0, v1), cursor)
}

/// Apex `v2` on the perpendicular bisector of `v0, v1`, at the equilateral
/// height `|v0 v1| * sqrt(3) / 2` from the base midpoint.
pub(crate) fn equilateral(vertices: &[Point], cursor: Point) -> Point {
    let (v0, v1) = (vertices[0], vertices[1]);
    let mid = midpoint(v0, v1);
    let foot = project_perpendicular(v0, v1, mid, cursor);
    let height = edge_length(v0, v1) * 3f64.sqrt() / 2.0;
    rescale_from(mid, foot, height)
}
