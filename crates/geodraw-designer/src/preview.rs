//! Render geometry for shapes and the live ghost preview.
//!
//! Nothing here draws; it only produces segments and ellipse outlines for
//! whatever renderer the caller owns. Preview values are recomputed from the
//! committed vertices on every cursor move and never touch the shape.

use geodraw_core::{angle, edge_length, midpoint, Point};
use serde::{Deserialize, Serialize};

use crate::model::ShapeFamily;
use crate::shape::Shape;

/// A straight segment between two lattice points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        edge_length(self.start, self.end)
    }
}

/// An ellipse centred on `center`, with full axis lengths, rotated by
/// `rotation` radians from the x-axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseOutline {
    pub center: Point,
    pub axis1: f64,
    pub axis2: f64,
    pub rotation: f64,
}

impl EllipseOutline {
    /// Outline spanned by the first axis `v0 v1` and a second-axis end.
    fn from_axes(v0: Point, v1: Point, second: Point) -> Self {
        let center = midpoint(v0, v1);
        Self {
            center,
            axis1: edge_length(v0, v1),
            axis2: edge_length(center, second) * 2.0,
            rotation: angle(v0, center),
        }
    }
}

/// Ghost geometry to draw while a shape is being built.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Nothing to draw
    Empty,
    /// Committed edges followed by the tentative ones
    Segments(Vec<Segment>),
    /// Tentative ellipse
    Ellipse(EllipseOutline),
}

impl Preview {
    pub fn is_empty(&self) -> bool {
        matches!(self, Preview::Empty)
    }
}

impl Shape {
    /// Edges of the committed outline, closing edge included once the shape
    /// is finalized.
    pub fn outline(&self) -> Vec<Segment> {
        let mut edges = open_edges(self.vertices());
        if self.is_finalized() {
            if let (Some(&first), Some(&last)) = (self.vertices().first(), self.vertices().last()) {
                edges.push(Segment::new(last, first));
            }
        }
        edges
    }

    /// Render geometry of a finalized ellipse-family shape.
    ///
    /// `None` for other families and for unfinished ellipses.
    pub fn ellipse_outline(&self) -> Option<EllipseOutline> {
        if self.family() != ShapeFamily::Ellipse || !self.is_finalized() {
            return None;
        }
        let v = self.vertices();
        Some(EllipseOutline::from_axes(v[0], v[1], v[3]))
    }

    /// Ghost preview for the cursor at `cursor`.
    pub fn preview(&self, cursor: Point) -> Preview {
        let v = self.vertices();
        if v.is_empty() || self.is_finalized() {
            return Preview::Empty;
        }

        if self.family() == ShapeFamily::Ellipse {
            return match self.next_candidate(cursor) {
                Some(second) if v.len() >= 2 => {
                    Preview::Ellipse(EllipseOutline::from_axes(v[0], v[1], second))
                }
                _ => Preview::Segments(vec![Segment::new(v[0], cursor)]),
            };
        }

        let mut segments = open_edges(v);
        let last = v[v.len() - 1];
        if v.len() < self.free_points() {
            segments.push(Segment::new(last, cursor));
        } else if let Some(candidate) = self.next_candidate(cursor) {
            segments.push(Segment::new(last, candidate));
            segments.push(Segment::new(v[0], candidate));
        }
        Preview::Segments(segments)
    }
}

fn open_edges(vertices: &[Point]) -> Vec<Segment> {
    vertices
        .windows(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .collect()
}
