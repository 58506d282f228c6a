//! Planar geometry helpers
//!
//! Everything the constraint resolvers need, expressed on lattice points:
//! lengths, slopes, angles, distances to edges, and the two ways of landing a
//! float result back on the lattice (solving a line for one coordinate, and
//! rescaling an offset by similar triangles).
//!
//! Float-to-lattice conversion truncates toward zero. NaN becomes 0 and
//! infinities saturate, so degenerate slopes never panic.

use crate::point::Point;

/// Length of the edge between two points.
pub fn edge_length(p1: Point, p2: Point) -> f64 {
    p1.distance_to(&p2)
}

/// Slope of the line through `p1` and `p2`.
///
/// Vertical lines give an infinite slope; two equal points give NaN.
pub fn slope(p1: Point, p2: Point) -> f64 {
    (f64::from(p1.y) - f64::from(p2.y)) / (f64::from(p1.x) - f64::from(p2.x))
}

/// Angle of the vector `p1 -> p2` relative to the x-axis, in radians.
pub fn angle(p1: Point, p2: Point) -> f64 {
    (f64::from(p2.y) - f64::from(p1.y)).atan2(f64::from(p2.x) - f64::from(p1.x))
}

/// Lattice midpoint of two points (coordinates truncated toward zero).
pub fn midpoint(p1: Point, p2: Point) -> Point {
    let half = |a: i32, b: i32| ((i64::from(a) + i64::from(b)) / 2) as i32;
    Point::new(half(p1.x, p2.x), half(p1.y, p2.y))
}

/// Minimum distance from `p` to the segment `a`-`b`.
#[must_use]
pub fn point_to_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let (px, py) = p.to_f64();
    let (ax, ay) = a.to_f64();
    let (bx, by) = b.to_f64();
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;

    if len_sq == 0.0 {
        return p.distance_to(&a);
    }

    // Project onto the infinite line, clamp to the segment.
    let t = (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0);
    let closest_x = ax + t * dx;
    let closest_y = ay + t * dy;

    ((px - closest_x).powi(2) + (py - closest_y).powi(2)).sqrt()
}

/// Distance from `p` to the infinite line through `a` and `b`.
#[must_use]
pub fn point_to_line_distance(p: Point, a: Point, b: Point) -> f64 {
    let (px, py) = p.to_f64();
    let (ax, ay) = a.to_f64();
    let (bx, by) = b.to_f64();
    let dx = bx - ax;
    let dy = by - ay;
    let len = (dx * dx + dy * dy).sqrt();

    if len == 0.0 {
        return p.distance_to(&a);
    }

    ((px - ax) * dy - (py - ay) * dx).abs() / len
}

/// The axis an edge runs closer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Classifies the edge `from -> to`.
///
/// `|dy| > |dx|` is `Vertical`; everything else, ties included, is
/// `Horizontal`. Every resolver branches on this one test.
pub fn dominant_axis(from: Point, to: Point) -> Axis {
    let dx = (i64::from(to.x) - i64::from(from.x)).abs();
    let dy = (i64::from(to.y) - i64::from(from.y)).abs();
    if dy > dx {
        Axis::Vertical
    } else {
        Axis::Horizontal
    }
}

/// The point at column `x` on the line through `anchor` with slope `m`.
pub fn y_on_line(anchor: Point, m: f64, x: i32) -> Point {
    let y = m * (f64::from(x) - f64::from(anchor.x)) + f64::from(anchor.y);
    Point::new(x, to_lattice(y))
}

/// The point at row `y` on the line through `anchor` with slope `m`.
pub fn x_on_line(anchor: Point, m: f64, y: i32) -> Point {
    let x = (f64::from(y) - f64::from(anchor.y)) / m + f64::from(anchor.x);
    Point::new(to_lattice(x), y)
}

/// Moves along the ray `origin -> through` until the distance from `origin`
/// equals `length`, using similar triangles on the offset.
pub fn rescale_from(origin: Point, through: Point, length: f64) -> Point {
    let ratio = length / edge_length(origin, through);
    let (ox, oy) = origin.to_f64();
    let (tx, ty) = through.to_f64();
    origin.offset(to_lattice((tx - ox) * ratio), to_lattice((ty - oy) * ratio))
}

fn to_lattice(v: f64) -> i32 {
    // `as` truncates toward zero, saturates and maps NaN to 0.
    v as i32
}
