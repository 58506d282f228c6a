//! Shape registry and constraint resolvers.
//!
//! Every kind maps to one pure resolver `fn(&[Point], Point) -> Point` that
//! turns the committed vertices and the live cursor into the next vertex.
//! Resolvers rely on the insertion order produced by the earlier steps of
//! the same kind; each one documents the order it expects.

use geodraw_core::{dominant_axis, slope, x_on_line, y_on_line, Axis, Point};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownShapeKind;

mod ellipse;
mod quadrilateral;
mod triangle;

/// Computes the next constrained vertex from committed vertices and cursor.
pub type Resolver = fn(&[Point], Point) -> Point;

/// Shape families share a vertex count and a metrics formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeFamily {
    Quadrilateral,
    Triangle,
    Ellipse,
}

impl ShapeFamily {
    /// Vertices of a complete shape. Ellipses store their four axis ends.
    pub const fn max_vertices(self) -> usize {
        match self {
            Self::Quadrilateral => 4,
            Self::Triangle => 3,
            Self::Ellipse => 4,
        }
    }
}

impl fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quadrilateral => write!(f, "Quadrilateral"),
            Self::Triangle => write!(f, "Triangle"),
            Self::Ellipse => write!(f, "Ellipse"),
        }
    }
}

/// Every constructible shape, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Trapezoid,
    Parallelogram,
    Rhombus,
    Rectangle,
    Square,
    ScaleneTriangle,
    IsoscelesTriangle,
    EquilateralTriangle,
    Ellipse,
    Circle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 10] = [
        ShapeKind::Trapezoid,
        ShapeKind::Parallelogram,
        ShapeKind::Rhombus,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::ScaleneTriangle,
        ShapeKind::IsoscelesTriangle,
        ShapeKind::EquilateralTriangle,
        ShapeKind::Ellipse,
        ShapeKind::Circle,
    ];

    pub const fn family(self) -> ShapeFamily {
        match self {
            Self::Trapezoid
            | Self::Parallelogram
            | Self::Rhombus
            | Self::Rectangle
            | Self::Square => ShapeFamily::Quadrilateral,
            Self::ScaleneTriangle | Self::IsoscelesTriangle | Self::EquilateralTriangle => {
                ShapeFamily::Triangle
            }
            Self::Ellipse | Self::Circle => ShapeFamily::Ellipse,
        }
    }

    /// Number of leading vertices taken verbatim from the pointer.
    pub const fn free_points(self) -> usize {
        match self {
            Self::Trapezoid | Self::Parallelogram | Self::ScaleneTriangle => 3,
            Self::Rhombus
            | Self::Rectangle
            | Self::Square
            | Self::IsoscelesTriangle
            | Self::EquilateralTriangle
            | Self::Ellipse
            | Self::Circle => 2,
        }
    }

    pub const fn max_vertices(self) -> usize {
        self.family().max_vertices()
    }

    /// Human-readable name used in summaries.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Trapezoid => "Trapezoid",
            Self::Parallelogram => "Parallelogram",
            Self::Rhombus => "Rhombus",
            Self::Rectangle => "Rectangle",
            Self::Square => "Square",
            Self::ScaleneTriangle => "Scalene Triangle",
            Self::IsoscelesTriangle => "Isosceles Triangle",
            Self::EquilateralTriangle => "Equilateral Triangle",
            Self::Ellipse => "Ellipse",
            Self::Circle => "Circle",
        }
    }

    /// 1-based position in the shape menu.
    pub fn menu_index(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).map_or(0, |i| i + 1)
    }

    /// Looks a kind up by its 1-based menu position.
    pub fn from_menu_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// The resolver table entry for this kind.
    pub fn resolver(self) -> Resolver {
        match self {
            Self::Trapezoid => quadrilateral::trapezoid,
            Self::Parallelogram => quadrilateral::parallelogram,
            Self::Rhombus => quadrilateral::rhombus,
            Self::Rectangle => quadrilateral::rectangle,
            Self::Square => quadrilateral::square,
            Self::ScaleneTriangle => triangle::scalene,
            Self::IsoscelesTriangle => triangle::isosceles,
            Self::EquilateralTriangle => triangle::equilateral,
            Self::Ellipse => ellipse::ellipse,
            Self::Circle => ellipse::circle,
        }
    }

    /// Runs the resolver when `vertices` is in the constrained phase of this
    /// kind, i.e. at least `free_points` and fewer than `max_vertices`.
    pub fn resolve(self, vertices: &[Point], cursor: Point) -> Option<Point> {
        let n = vertices.len();
        if n < self.free_points() || n >= self.max_vertices() {
            return None;
        }
        Some(self.resolver()(vertices, cursor))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts a menu number (`"5"`) or a name in any case, with spaces,
/// dashes or underscores between words (`"equilateral-triangle"`).
impl FromStr for ShapeKind {
    type Err = UnknownShapeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Self::from_menu_index(index).ok_or_else(|| UnknownShapeKind(s.to_string()));
        }

        let wanted: String = trimmed
            .chars()
            .filter(|c| c.is_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.name()
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .map(|c| c.to_ascii_lowercase())
                    .eq(wanted.chars())
            })
            .ok_or_else(|| UnknownShapeKind(s.to_string()))
    }
}

/// Fourth vertex of a parallelogram from `v0, v1, v2`: `v2 + (v0 - v1)`.
pub(crate) fn parallelogram_law(v: &[Point]) -> Point {
    v[2] + (v[0] - v[1])
}

/// Projects `cursor` onto the line through `anchor` perpendicular to the
/// base `v0 -> v1`.
///
/// A base closer to vertical keeps the cursor's x and solves for y; any other
/// base keeps the cursor's y and solves for x.
pub(crate) fn project_perpendicular(v0: Point, v1: Point, anchor: Point, cursor: Point) -> Point {
    let normal = -1.0 / slope(v1, v0);
    match dominant_axis(v0, v1) {
        Axis::Vertical => y_on_line(anchor, normal, cursor.x),
        Axis::Horizontal => x_on_line(anchor, normal, cursor.y),
    }
}
